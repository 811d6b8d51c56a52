//! Player registry: identities, secret roles, seating, and life status.
//!
//! Seats are fixed at construction and drive presidential rotation. Roles
//! are assigned once (shuffled or fixed by configuration) and never change.

pub mod registry;
pub mod role;

pub use registry::{Player, PlayerRegistry};
pub use role::{
    fascist_count, is_valid_distribution, role_distribution, Party, Role, MAX_PLAYERS, MIN_PLAYERS,
};
