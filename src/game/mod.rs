//! The game state machine, discussion queue, and replay.

pub mod discussion;
pub mod machine;
pub mod phase;
pub mod replay;

pub use discussion::{Discussion, Resume};
pub use machine::{Game, Progress};
pub use phase::Phase;
pub use replay::{Replay, ReplayError};
