//! Game configuration.
//!
//! A `GameConfig` fully determines a game together with the decisions fed
//! into it: the same config and the same decision sequence always replay
//! to the same state.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::deck::{Policy, PolicyCounts};
use crate::roster::{is_valid_distribution, Role, MAX_PLAYERS, MIN_PLAYERS};

/// When consecutive rejected elections trigger a chaos enactment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChaosThreshold {
    /// As many rejections as there are living players.
    LivingPlayers,
    /// A fixed number of rejections (the printed board uses 3).
    Fixed(u8),
}

impl ChaosThreshold {
    /// The rejection count that triggers chaos with `living` players alive.
    #[must_use]
    pub fn resolve(self, living: usize) -> usize {
        match self {
            ChaosThreshold::LivingPlayers => living,
            ChaosThreshold::Fixed(n) => usize::from(n),
        }
    }
}

/// Table setup and rule knobs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player names in seat order.
    pub player_names: Vec<String>,

    /// Seed for role assignment and deck shuffles.
    pub seed: u64,

    /// Turns a policy-choice or investigation record stays visible.
    pub private_info_horizon: u32,

    /// Turns a policy-peek record stays visible.
    pub peek_horizon: u32,

    /// Rounds of optional discussion after nominations, passed elections,
    /// enactments and power use. 0 disables discussion.
    pub discussion_rounds: u32,

    pub chaos_threshold: ChaosThreshold,

    /// Seat-ordered roles. `None` shuffles the standard distribution.
    pub roles: Option<Vec<Role>>,

    /// Initial draw pile, top first. `None` shuffles a full deck.
    pub deck: Option<Vec<Policy>>,
}

impl GameConfig {
    /// Create a config with default rules for the given players.
    pub fn new<S: Into<String>>(player_names: impl IntoIterator<Item = S>) -> Self {
        Self {
            player_names: player_names.into_iter().map(Into::into).collect(),
            seed: 42,
            private_info_horizon: 3,
            peek_horizon: 1,
            discussion_rounds: 2,
            chaos_threshold: ChaosThreshold::LivingPlayers,
            roles: None,
            deck: None,
        }
    }

    /// Convenience: players named "P1".."Pn".
    #[must_use]
    pub fn with_player_count(count: usize) -> Self {
        Self::new((1..=count).map(|i| format!("P{i}")))
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_private_info_horizon(mut self, turns: u32) -> Self {
        self.private_info_horizon = turns;
        self
    }

    #[must_use]
    pub fn with_peek_horizon(mut self, turns: u32) -> Self {
        self.peek_horizon = turns;
        self
    }

    #[must_use]
    pub fn with_discussion_rounds(mut self, rounds: u32) -> Self {
        self.discussion_rounds = rounds;
        self
    }

    #[must_use]
    pub fn with_chaos_threshold(mut self, threshold: ChaosThreshold) -> Self {
        self.chaos_threshold = threshold;
        self
    }

    /// Fix the role of every seat instead of shuffling.
    #[must_use]
    pub fn with_roles(mut self, roles: Vec<Role>) -> Self {
        self.roles = Some(roles);
        self
    }

    /// Fix the initial draw pile (top first) instead of shuffling.
    #[must_use]
    pub fn with_deck(mut self, top_first: Vec<Policy>) -> Self {
        self.deck = Some(top_first);
        self
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Check the config describes a playable table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let count = self.player_count();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(ConfigError::PlayerCount(count));
        }

        let mut seen = FxHashSet::default();
        for (seat, name) in self.player_names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyName(seat));
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateName(name.clone()));
            }
        }

        if let Some(roles) = &self.roles {
            if roles.len() != count || !is_valid_distribution(roles) {
                return Err(ConfigError::RoleDistribution(count));
            }
        }

        if let Some(deck) = &self.deck {
            let counts = PolicyCounts::of(deck);
            if !counts.is_full_deck() {
                return Err(ConfigError::DeckComposition {
                    liberal: counts.liberal,
                    fascist: counts.fascist,
                });
            }
        }

        if self.chaos_threshold == ChaosThreshold::Fixed(0) {
            return Err(ConfigError::ChaosThreshold);
        }

        Ok(())
    }
}
