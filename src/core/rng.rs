//! Seeded randomness for the table.
//!
//! Every random choice the engine makes flows from `GameConfig::seed`. Role
//! dealing and the policy deck each get their own [`Stream`], so stacking
//! the deck in a test leaves the dealt roles exactly where they were.
//!
//! ```
//! use secret_hitler::core::{GameRng, Stream};
//!
//! let table = GameRng::new(42);
//! let mut roles = table.stream(Stream::Roles);
//! let first = roles.below(10);
//! assert_eq!(first, GameRng::new(42).stream(Stream::Roles).below(10));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Independent random sequences derived from one table seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stream {
    /// Shuffling the role cards before they are dealt.
    Roles,
    /// Shuffling and reshuffling the policy deck.
    Deck,
}

/// ChaCha8 generator tagged with the seed it was built from.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive the generator for `stream`.
    ///
    /// The derivation uses `FxHasher`, whose output does not change between
    /// compiler releases, so recorded replays keep their deals.
    #[must_use]
    pub fn stream(&self, stream: Stream) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        stream.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Uniform index in `0..upper`. `upper` must be positive.
    pub fn below(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }

    /// True with the given probability.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        let xs: Vec<_> = (0..50).map(|_| a.below(1000)).collect();
        let ys: Vec<_> = (0..50).map(|_| b.below(1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_streams_diverge() {
        let table = GameRng::new(42);
        let mut roles = table.stream(Stream::Roles);
        let mut deck = table.stream(Stream::Deck);
        assert_ne!(roles.seed(), deck.seed());

        let xs: Vec<_> = (0..10).map(|_| roles.below(1000)).collect();
        let ys: Vec<_> = (0..10).map(|_| deck.below(1000)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_stream_ignores_parent_position() {
        let mut table = GameRng::new(9);
        let before = table.stream(Stream::Deck).below(1000);
        table.below(10);
        assert_eq!(table.stream(Stream::Deck).below(1000), before);
    }

    #[test]
    fn test_shuffle_keeps_the_deck() {
        let mut rng = GameRng::new(7);
        let mut cards: Vec<u8> = (0..17).collect();
        rng.shuffle(&mut cards);
        assert_ne!(cards, (0..17).collect::<Vec<_>>());
        cards.sort_unstable();
        assert_eq!(cards, (0..17).collect::<Vec<_>>());
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = GameRng::new(3);
        assert!((0..20).all(|_| rng.chance(1.0)));
        assert!((0..20).all(|_| !rng.chance(0.0)));
    }
}
