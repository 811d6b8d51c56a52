//! Core engine types: seats, RNG, configuration, errors, decision protocol.

pub mod config;
pub mod decision;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{ChaosThreshold, GameConfig};
pub use decision::{DecisionKind, DecisionOption, DecisionRecord, DecisionRequest, DecisionResponse};
pub use error::{ConfigError, DecisionError, GameError, RulesViolation};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, Stream};
