//! Which executive power each Fascist policy grants.
//!
//! | Fascist policies | 5-6 players | 7-8 players       | 9-10 players      |
//! |------------------|-------------|-------------------|-------------------|
//! | 1                | -           | -                 | investigate       |
//! | 2                | -           | investigate       | investigate       |
//! | 3                | policy peek | special election  | special election  |
//! | 4                | execution   | execution         | execution         |
//! | 5                | execution   | execution         | execution         |

use serde::{Deserialize, Serialize};

/// A presidential power unlocked by the Fascist track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecutivePower {
    /// Learn one player's party membership.
    Investigate,
    /// Choose the next president.
    SpecialElection,
    /// Look at the top three policies.
    PolicyPeek,
    /// Kill a player.
    Execution,
}

impl ExecutivePower {
    /// Whether the president must pick a target player.
    #[must_use]
    pub const fn needs_target(self) -> bool {
        !matches!(self, ExecutivePower::PolicyPeek)
    }
}

impl std::fmt::Display for ExecutivePower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutivePower::Investigate => write!(f, "investigate loyalty"),
            ExecutivePower::SpecialElection => write!(f, "special election"),
            ExecutivePower::PolicyPeek => write!(f, "policy peek"),
            ExecutivePower::Execution => write!(f, "execution"),
        }
    }
}

/// The power granted when the Fascist track reaches `fascist_enacted` at a
/// table of `player_count` seats.
#[must_use]
pub fn power_for(fascist_enacted: u8, player_count: usize) -> Option<ExecutivePower> {
    use ExecutivePower::*;

    match (fascist_enacted, player_count) {
        (1, 9..=10) => Some(Investigate),
        (2, 7..=10) => Some(Investigate),
        (3, 5..=6) => Some(PolicyPeek),
        (3, 7..=10) => Some(SpecialElection),
        (4 | 5, _) => Some(Execution),
        _ => None,
    }
}
