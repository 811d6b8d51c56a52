//! Deterministic replay.
//!
//! A game is fully determined by its config and its accepted decisions.
//! `Replay` bundles both and encodes them with `bincode`.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::machine::Game;
use crate::core::{ConfigError, DecisionRecord, GameConfig, GameError};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Decision {sequence} could not be replayed: {source}")]
    Decision { sequence: u32, source: GameError },

    #[error("Replay encoding failed: {0}")]
    Encoding(#[from] bincode::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replay {
    pub config: GameConfig,
    pub decisions: Vec<DecisionRecord>,
}

impl Replay {
    /// Capture a game so far.
    #[must_use]
    pub fn capture(game: &Game) -> Self {
        Self {
            config: game.config().clone(),
            decisions: game.history().to_vec(),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ReplayError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ReplayError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Rebuild the game by feeding every recorded decision back in.
    pub fn run(&self) -> Result<Game, ReplayError> {
        let mut game = Game::new(self.config.clone())?;
        for record in &self.decisions {
            game.apply(record.player, record.response.clone())
                .map_err(|source| ReplayError::Decision {
                    sequence: record.sequence,
                    source,
                })?;
        }
        debug!(decisions = self.decisions.len(), "Replay finished");
        Ok(game)
    }
}

impl Game {
    /// Everything needed to rebuild this game.
    #[must_use]
    pub fn replay(&self) -> Replay {
        Replay::capture(self)
    }
}
