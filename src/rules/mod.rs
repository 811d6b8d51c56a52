//! Win conditions and game results.

pub mod win;

pub use win::{GameResult, WinConditionEvaluator, WinReason};
