//! Grant and resolve executive powers.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::table::{power_for, ExecutivePower};
use crate::core::{DecisionOption, PlayerId, RulesViolation};
use crate::deck::{Hand, PolicyDeck, Tracks};
use crate::government::GovernmentTracker;
use crate::legislature::PRESIDENT_HAND;
use crate::roster::{Party, PlayerRegistry};

/// The effect of a resolved power.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerOutcome {
    Investigated { target: PlayerId, party: Party },
    SpecialElection { target: PlayerId },
    Peeked { upcoming: Hand },
    Executed { target: PlayerId, was_hitler: bool },
}

impl PowerOutcome {
    /// The power that produced this outcome.
    #[must_use]
    pub fn power(&self) -> ExecutivePower {
        match self {
            PowerOutcome::Investigated { .. } => ExecutivePower::Investigate,
            PowerOutcome::SpecialElection { .. } => ExecutivePower::SpecialElection,
            PowerOutcome::Peeked { .. } => ExecutivePower::PolicyPeek,
            PowerOutcome::Executed { .. } => ExecutivePower::Execution,
        }
    }

    /// The targeted player, if the power had one.
    #[must_use]
    pub fn target(&self) -> Option<PlayerId> {
        match self {
            PowerOutcome::Investigated { target, .. }
            | PowerOutcome::SpecialElection { target }
            | PowerOutcome::Executed { target, .. } => Some(*target),
            PowerOutcome::Peeked { .. } => None,
        }
    }
}

/// Maps the board to powers and applies them.
pub struct ExecutivePowerResolver;

impl ExecutivePowerResolver {
    /// Power granted by the Fascist enactment that produced `tracks`.
    #[must_use]
    pub fn granted(tracks: &Tracks, player_count: usize) -> Option<ExecutivePower> {
        power_for(tracks.fascist, player_count)
    }

    /// Legal targets: every living player except the president.
    ///
    /// Repeat investigations of the same player are allowed.
    #[must_use]
    pub fn targets(president: PlayerId, registry: &PlayerRegistry) -> Vec<DecisionOption> {
        registry
            .living()
            .filter(|&id| id != president)
            .map(DecisionOption::Player)
            .collect()
    }

    /// Look at the top of the draw pile without disturbing it.
    #[must_use]
    pub fn peek(deck: &PolicyDeck) -> PowerOutcome {
        PowerOutcome::Peeked {
            upcoming: deck.peek(PRESIDENT_HAND),
        }
    }

    /// Apply a targeted power chosen by `president`.
    pub fn resolve_targeted(
        power: ExecutivePower,
        president: PlayerId,
        target: PlayerId,
        registry: &mut PlayerRegistry,
        tracker: &mut GovernmentTracker,
    ) -> Result<PowerOutcome, RulesViolation> {
        if !registry.is_alive(target) {
            return Err(RulesViolation::DeadPlayerRequested(target));
        }

        let outcome = match power {
            ExecutivePower::Investigate => PowerOutcome::Investigated {
                target,
                party: registry.get(target).party(),
            },
            ExecutivePower::SpecialElection => {
                tracker.schedule_special_election(target);
                PowerOutcome::SpecialElection { target }
            }
            ExecutivePower::Execution => {
                registry.kill(target);
                PowerOutcome::Executed {
                    target,
                    was_hitler: registry.role(target).is_hitler(),
                }
            }
            ExecutivePower::PolicyPeek => return Err(RulesViolation::UnexpectedTarget(power)),
        };

        info!(%president, %target, power = %power, "Executive power resolved");
        Ok(outcome)
    }
}
