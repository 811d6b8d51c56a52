//! Presidency rotation, nominations, and term limits.
//!
//! ## Rotation
//!
//! The presidency passes clockwise to the next living seat. A special
//! election overrides exactly one presidency; afterwards rotation resumes
//! from the seat that called it, so the override never shifts the order.
//!
//! ## Term limits
//!
//! The last *elected* chancellor is never eligible. The last elected
//! president is ineligible too, unless fewer than five players are alive.
//! Rejected elections do not touch the last government.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{PlayerId, RulesViolation};
use crate::roster::PlayerRegistry;

/// Living players at or above which the previous president is term-limited.
pub const PRESIDENT_TERM_LIMIT_MIN_LIVING: usize = 5;

/// A president/chancellor pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Government {
    pub president: PlayerId,
    pub chancellor: PlayerId,
}

/// Tracks the current and last governments.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GovernmentTracker {
    president: PlayerId,
    /// Seat normal rotation continues from.
    anchor: PlayerId,
    special_next: Option<PlayerId>,
    nominee: Option<PlayerId>,
    chancellor: Option<PlayerId>,
    last_elected: Option<Government>,
    rejections: usize,
}

impl GovernmentTracker {
    #[must_use]
    pub fn new(first_president: PlayerId) -> Self {
        Self {
            president: first_president,
            anchor: first_president,
            special_next: None,
            nominee: None,
            chancellor: None,
            last_elected: None,
            rejections: 0,
        }
    }

    #[must_use]
    pub fn president(&self) -> PlayerId {
        self.president
    }

    /// Nominated chancellor awaiting a vote.
    #[must_use]
    pub fn nominee(&self) -> Option<PlayerId> {
        self.nominee
    }

    /// Chancellor elected this round.
    #[must_use]
    pub fn chancellor(&self) -> Option<PlayerId> {
        self.chancellor
    }

    /// The government elected this round, if any.
    #[must_use]
    pub fn current(&self) -> Option<Government> {
        self.chancellor.map(|chancellor| Government {
            president: self.president,
            chancellor,
        })
    }

    /// Most recently elected government, kept across rejected elections.
    #[must_use]
    pub fn last_elected(&self) -> Option<Government> {
        self.last_elected
    }

    /// Consecutive rejected elections.
    #[must_use]
    pub fn rejections(&self) -> usize {
        self.rejections
    }

    /// Pending special-election president, if one was chosen.
    #[must_use]
    pub fn special_next(&self) -> Option<PlayerId> {
        self.special_next
    }

    /// Whether `candidate` may be nominated chancellor right now.
    #[must_use]
    pub fn is_eligible(&self, candidate: PlayerId, registry: &PlayerRegistry) -> bool {
        if !registry.is_alive(candidate) || candidate == self.president {
            return false;
        }
        let Some(last) = self.last_elected else {
            return true;
        };
        if candidate == last.chancellor {
            return false;
        }
        !(candidate == last.president && registry.living_count() >= PRESIDENT_TERM_LIMIT_MIN_LIVING)
    }

    /// Eligible chancellor candidates in seat order.
    #[must_use]
    pub fn eligible_chancellors(&self, registry: &PlayerRegistry) -> Vec<PlayerId> {
        registry
            .living()
            .filter(|&id| self.is_eligible(id, registry))
            .collect()
    }

    pub fn nominate(&mut self, candidate: PlayerId) {
        self.nominee = Some(candidate);
    }

    /// Seat the nominee as chancellor and remember the government for term limits.
    pub fn elect(&mut self) -> Option<Government> {
        let chancellor = self.nominee.take()?;
        let government = Government {
            president: self.president,
            chancellor,
        };
        self.chancellor = Some(chancellor);
        self.last_elected = Some(government);
        self.rejections = 0;
        Some(government)
    }

    /// Drop the nominee and count the failed election. Returns the new count.
    pub fn reject(&mut self) -> usize {
        self.nominee = None;
        self.rejections += 1;
        self.rejections
    }

    /// Reset the election tracker after a chaos enactment.
    pub fn reset_rejections(&mut self) {
        self.rejections = 0;
    }

    /// Make `target` the next president, once.
    pub fn schedule_special_election(&mut self, target: PlayerId) {
        self.special_next = Some(target);
    }

    /// End the round and hand the presidency on.
    pub fn advance(&mut self, registry: &PlayerRegistry) -> Result<PlayerId, RulesViolation> {
        self.nominee = None;
        self.chancellor = None;

        let next = match self.special_next.take().filter(|&id| registry.is_alive(id)) {
            Some(special) => special,
            None => {
                let next = registry
                    .next_living_after(self.anchor)
                    .ok_or(RulesViolation::NoLivingPresident)?;
                self.anchor = next;
                next
            }
        };

        debug!(from = %self.president, to = %next, "Presidency passed");
        self.president = next;
        Ok(next)
    }
}
