//! Viewer-scoped projections of the game.

pub mod knowledge;
pub mod snapshot;

pub use knowledge::{known_roles, public_roles, HITLER_KNOWS_TEAM_MAX_PLAYERS};
pub use snapshot::{PlayerView, SeatView};
