//! # secret-hitler
//!
//! A deterministic rules engine for the social deduction game Secret Hitler.
//!
//! ## Design Principles
//!
//! 1. **One Decision at a Time**: The engine publishes a single pending
//!    `DecisionRequest` and accepts a single `DecisionResponse`. Invalid
//!    input is rejected without touching state.
//!
//! 2. **Pure Projections**: What a player may see is computed on demand by
//!    `PlayerView::project`. No per-viewer mutable state exists.
//!
//! 3. **Deterministic Replay**: A `GameConfig` seed plus the accepted
//!    decisions rebuild the identical game.
//!
//! ## Architecture
//!
//! - **Explicit Ownership**: `Game` owns the whole table. Several games can
//!   run side by side with no shared state.
//!
//! - **Persistent Event Log**: Events live in an `im::Vector`, so handing
//!   a snapshot to every viewer is O(1).
//!
//! - **Expiring Private Knowledge**: Private records carry an expiry turn
//!   and are pruned as turns advance.
//!
//! ## Modules
//!
//! - `core`: Player ids, RNG, configuration, errors, decision protocol
//! - `roster`: Roles, parties, and the player registry
//! - `deck`: Policies, the draw and discard piles, the board tracks
//! - `government`: Rotation, term limits, and voting
//! - `legislature`: The draw/discard/enact session
//! - `powers`: Executive powers and their resolution
//! - `rules`: Win conditions
//! - `history`: Public events and private records
//! - `view`: Viewer-scoped snapshots
//! - `game`: The phase state machine and replay
//! - `driver`: Responders and the table run loop

pub mod core;
pub mod roster;
pub mod deck;
pub mod government;
pub mod legislature;
pub mod powers;
pub mod rules;
pub mod history;
pub mod view;
pub mod game;
pub mod driver;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng, Stream,
    GameConfig, ChaosThreshold,
    ConfigError, DecisionError, RulesViolation, GameError,
    DecisionKind, DecisionOption, DecisionRequest, DecisionResponse, DecisionRecord,
};

pub use crate::roster::{Party, Role, PlayerRegistry};

pub use crate::deck::{Policy, PolicyDeck, Tracks};

pub use crate::powers::ExecutivePower;

pub use crate::rules::{GameResult, WinReason};

pub use crate::history::{Event, EventKind, PrivateContent, PrivateInfoRecord};

pub use crate::view::PlayerView;

pub use crate::game::{Game, Phase, Progress, Replay};

pub use crate::driver::{Responder, RandomResponder, ScriptedResponder, Table};
