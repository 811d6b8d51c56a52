//! Policy deck and board tracks.
//!
//! ## Conservation
//!
//! At every point the 17 policy cards are split between the draw pile,
//! the discard pile, the open legislative hand, and the two tracks.
//! `PolicyDeck` owns the first two; `Tracks` counts the last.

pub mod board;
pub mod piles;
pub mod policy;

pub use board::{Tracks, FASCIST_TRACK_SLOTS, HITLER_ZONE, LIBERAL_TRACK_SLOTS};
pub use piles::{Hand, PolicyDeck};
pub use policy::{
    full_deck, Policy, PolicyCounts, FASCIST_POLICIES, LIBERAL_POLICIES, TOTAL_POLICIES,
};
