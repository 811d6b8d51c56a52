//! Legislative session: the draw, discard, and enact sequence.

pub mod session;

pub use session::{
    ChancellorDiscard, LegislativeSession, PresidentDiscard, Stage, CHANCELLOR_HAND, PRESIDENT_HAND,
};
