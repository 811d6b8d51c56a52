//! Run loop seating one responder per player.

use thiserror::Error;
use tracing::{debug, error, warn};

use super::responder::Responder;
use crate::core::{DecisionError, GameError, PlayerId, RulesViolation};
use crate::game::{Game, Progress};
use crate::rules::GameResult;

/// Consecutive invalid responses tolerated from one seat.
pub const DEFAULT_MAX_INVALID_RESPONSES: u32 = 3;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Table has {players} seats but {responders} responders")]
    ResponderCount { players: usize, responders: usize },

    #[error("{player} gave {attempts} invalid responses in a row, last: {last}")]
    TooManyInvalid {
        player: PlayerId,
        attempts: u32,
        last: DecisionError,
    },

    #[error(transparent)]
    Rules(#[from] RulesViolation),
}

/// A game plus the responders playing it.
pub struct Table {
    game: Game,
    responders: Vec<Box<dyn Responder>>,
    max_invalid_responses: u32,
    invalid_streak: u32,
}

impl Table {
    /// Seat `responders` in seat order.
    pub fn new(game: Game, responders: Vec<Box<dyn Responder>>) -> Result<Self, TableError> {
        let players = game.registry().player_count();
        if responders.len() != players {
            return Err(TableError::ResponderCount {
                players,
                responders: responders.len(),
            });
        }
        Ok(Self {
            game,
            responders,
            max_invalid_responses: DEFAULT_MAX_INVALID_RESPONSES,
            invalid_streak: 0,
        })
    }

    #[must_use]
    pub fn with_max_invalid_responses(mut self, attempts: u32) -> Self {
        self.max_invalid_responses = attempts.max(1);
        self
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn into_game(self) -> Game {
        self.game
    }

    /// Ask for and apply one decision. `Some` once the game is over.
    pub fn step(&mut self) -> Result<Option<GameResult>, TableError> {
        let Some(request) = self.game.pending().cloned() else {
            return Ok(self.game.result());
        };

        let player = request.player;
        let view = self.game.view(player);
        let response = self.responders[player.seat()].respond(&request, &view);

        match self.game.apply(player, response) {
            Ok(Progress::Continue(next)) => {
                self.invalid_streak = 0;
                debug!(next = %next.player, kind = ?next.kind, "Next decision");
                Ok(None)
            }
            Ok(Progress::Finished(result)) => {
                self.invalid_streak = 0;
                Ok(Some(result))
            }
            Err(GameError::Decision(err)) => {
                self.invalid_streak += 1;
                warn!(
                    %player,
                    attempts = self.invalid_streak,
                    error = %err,
                    "Invalid response, asking again"
                );
                if self.invalid_streak >= self.max_invalid_responses {
                    return Err(TableError::TooManyInvalid {
                        player,
                        attempts: self.invalid_streak,
                        last: err,
                    });
                }
                Ok(None)
            }
            Err(GameError::Rules(violation)) => {
                error!(error = %violation, "Stopping table");
                Err(violation.into())
            }
        }
    }

    /// Play until someone wins.
    pub fn run(&mut self) -> Result<GameResult, TableError> {
        loop {
            if let Some(result) = self.step()? {
                return Ok(result);
            }
        }
    }
}
