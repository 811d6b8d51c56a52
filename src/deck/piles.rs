//! The policy draw and discard piles.
//!
//! The draw pile is ordered with the top card at the end of the `Vec`
//! (matching `Vec::pop`). The discard pile is an unordered multiset.
//! Enacted cards leave the deck permanently, so a reshuffle only ever
//! recombines the draw and discard piles.

use smallvec::SmallVec;
use tracing::debug;

use super::policy::{Policy, PolicyCounts};
use crate::core::{GameRng, RulesViolation};

/// Cards drawn or held in one legislative hand.
pub type Hand = SmallVec<[Policy; 3]>;

/// Draw pile + discard pile with reshuffle-on-exhaustion.
#[derive(Clone, Debug)]
pub struct PolicyDeck {
    draw_pile: Vec<Policy>,
    discard_pile: Vec<Policy>,
    rng: GameRng,
    reshuffles: u32,
}

impl PolicyDeck {
    /// Create a deck from cards listed top first.
    #[must_use]
    pub fn stacked(top_first: Vec<Policy>, rng: GameRng) -> Self {
        let mut draw_pile = top_first;
        draw_pile.reverse();
        Self {
            draw_pile,
            discard_pile: Vec::new(),
            rng,
            reshuffles: 0,
        }
    }

    /// Create a deck from the given cards after shuffling them.
    #[must_use]
    pub fn shuffled(mut cards: Vec<Policy>, mut rng: GameRng) -> Self {
        rng.shuffle(&mut cards);
        Self {
            draw_pile: cards,
            discard_pile: Vec::new(),
            rng,
            reshuffles: 0,
        }
    }

    /// Draw the top `count` cards, reshuffling the discard pile in first if
    /// the draw pile is short.
    ///
    /// Fails only if draw + discard together cannot supply `count` cards,
    /// which correct accounting never allows.
    pub fn draw(&mut self, count: usize) -> Result<Hand, RulesViolation> {
        self.ensure(count);

        if self.draw_pile.len() < count {
            return Err(RulesViolation::DeckExhausted {
                requested: count,
                available: self.draw_pile.len(),
            });
        }

        let split = self.draw_pile.len() - count;
        Ok(self.draw_pile.drain(split..).rev().collect())
    }

    /// Look at the top `count` cards without removing them (top first).
    #[must_use]
    pub fn peek(&self, count: usize) -> Hand {
        self.draw_pile.iter().rev().take(count).copied().collect()
    }

    /// Move cards to the discard pile.
    pub fn discard(&mut self, cards: impl IntoIterator<Item = Policy>) {
        self.discard_pile.extend(cards);
    }

    /// Reshuffle if fewer than `min` cards remain in the draw pile.
    ///
    /// Returns whether a reshuffle happened.
    pub fn ensure(&mut self, min: usize) -> bool {
        if self.draw_pile.len() >= min || self.discard_pile.is_empty() {
            return false;
        }
        self.reshuffle();
        true
    }

    /// Shuffle the discard pile back into the draw pile.
    pub fn reshuffle(&mut self) {
        self.draw_pile.append(&mut self.discard_pile);
        self.rng.shuffle(&mut self.draw_pile);
        self.reshuffles += 1;

        debug!(
            draw_pile = self.draw_pile.len(),
            reshuffles = self.reshuffles,
            "Reshuffled discard pile into draw pile"
        );
    }

    /// Liberal/Fascist counts left undrawn.
    #[must_use]
    pub fn remaining_counts(&self) -> PolicyCounts {
        PolicyCounts::of(&self.draw_pile)
    }

    #[must_use]
    pub fn draw_len(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Number of reshuffles so far.
    #[must_use]
    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }
}
