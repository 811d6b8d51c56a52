//! Policy cards.

use serde::{Deserialize, Serialize};

/// Liberal policies in a full deck.
pub const LIBERAL_POLICIES: usize = 6;

/// Fascist policies in a full deck.
pub const FASCIST_POLICIES: usize = 11;

/// Every policy card in the game.
pub const TOTAL_POLICIES: usize = LIBERAL_POLICIES + FASCIST_POLICIES;

/// A policy card. Cards of the same type are indistinguishable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    Liberal,
    Fascist,
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Policy::Liberal => write!(f, "Liberal"),
            Policy::Fascist => write!(f, "Fascist"),
        }
    }
}

/// Liberal/Fascist card counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyCounts {
    pub liberal: usize,
    pub fascist: usize,
}

impl PolicyCounts {
    /// Count the cards in a slice.
    #[must_use]
    pub fn of(cards: &[Policy]) -> Self {
        cards.iter().fold(Self::default(), |mut counts, card| {
            match card {
                Policy::Liberal => counts.liberal += 1,
                Policy::Fascist => counts.fascist += 1,
            }
            counts
        })
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.liberal + self.fascist
    }

    /// Whether these counts describe a complete, untouched deck.
    #[must_use]
    pub fn is_full_deck(&self) -> bool {
        self.liberal == LIBERAL_POLICIES && self.fascist == FASCIST_POLICIES
    }
}

/// A full deck in canonical (unshuffled) order.
#[must_use]
pub fn full_deck() -> Vec<Policy> {
    let mut cards = vec![Policy::Liberal; LIBERAL_POLICIES];
    cards.extend(std::iter::repeat(Policy::Fascist).take(FASCIST_POLICIES));
    cards
}
