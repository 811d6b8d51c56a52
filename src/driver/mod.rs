//! Driving a game with pluggable decision sources.

pub mod responder;
pub mod table;

pub use responder::{RandomResponder, Responder, ScriptedResponder};
pub use table::{Table, TableError, DEFAULT_MAX_INVALID_RESPONSES};
