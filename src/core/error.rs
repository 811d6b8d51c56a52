//! Error taxonomy.
//!
//! | Type             | Meaning                                   | Recovery |
//! |------------------|-------------------------------------------|----------|
//! | `ConfigError`    | table cannot be set up                    | fix config |
//! | `DecisionError`  | malformed or illegal decision input       | re-request the same decision |
//! | `RulesViolation` | internal accounting broke                 | none, engine defect |
//!
//! Game endings are not errors: they surface as `Progress::Finished`.

use thiserror::Error;

use super::decision::DecisionOption;
use super::player::PlayerId;
use crate::powers::ExecutivePower;

/// Construction-time configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Game requires 5-10 players, got {0}")]
    PlayerCount(usize),

    #[error("Player name at seat {0} is empty")]
    EmptyName(usize),

    #[error("Duplicate player name: {0}")]
    DuplicateName(String),

    #[error("Role assignment does not match the distribution for {0} players")]
    RoleDistribution(usize),

    #[error("Deck must hold 6 liberal and 11 fascist policies, got {liberal} and {fascist}")]
    DeckComposition { liberal: usize, fascist: usize },

    #[error("Chaos threshold must be at least 1")]
    ChaosThreshold,
}

/// A decision that cannot be applied. State is untouched; re-request it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("The game is over; no decision is pending")]
    GameOver,

    #[error("Decision expected from {expected}, got {actual}")]
    WrongPlayer { expected: PlayerId, actual: PlayerId },

    #[error("Choice {choice} out of range for {options} options")]
    ChoiceOutOfRange { choice: usize, options: usize },

    #[error("A discard claim is only allowed on policy discards")]
    UnexpectedClaim,

    #[error("Speaking in a discussion requires a message")]
    MissingMessage,
}

/// Rules-engine invariant violation. Reaching one of these is a defect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesViolation {
    #[error("Cannot draw {requested} policies, only {available} left in draw and discard piles")]
    DeckExhausted { requested: usize, available: usize },

    #[error("Policy conservation broken: {counted} cards accounted for, expected 17")]
    ConservationBroken { counted: usize },

    #[error("Decision requested from dead player {0}")]
    DeadPlayerRequested(PlayerId),

    #[error("No eligible chancellor candidate for president {president}")]
    NoEligibleCandidate { president: PlayerId },

    #[error("Legislative hand holds {actual} cards, expected {expected}")]
    HandMismatch { expected: usize, actual: usize },

    #[error("Ballot from {0} is a repeat or not from an eligible voter")]
    InvalidBallot(PlayerId),

    #[error("Vote closed with {cast} of {voters} ballots cast")]
    VoteIncomplete { cast: usize, voters: usize },

    #[error("No living player to take the presidency")]
    NoLivingPresident,

    #[error("The {0} power takes no target")]
    UnexpectedTarget(ExecutivePower),

    #[error("Option {0:?} does not fit the current phase")]
    PhaseMismatch(DecisionOption),
}

/// Any failure from `Game::apply`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Decision(#[from] DecisionError),

    #[error(transparent)]
    Rules(#[from] RulesViolation),
}

impl GameError {
    /// Validation failures can be retried by re-requesting the decision.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::Decision(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverability() {
        let invalid: GameError = DecisionError::ChoiceOutOfRange { choice: 4, options: 3 }.into();
        assert!(invalid.is_recoverable());

        let broken: GameError = RulesViolation::DeckExhausted { requested: 3, available: 2 }.into();
        assert!(!broken.is_recoverable());
    }

    #[test]
    fn test_messages() {
        let err = DecisionError::WrongPlayer {
            expected: PlayerId::new(1),
            actual: PlayerId::new(3),
        };
        assert_eq!(err.to_string(), "Decision expected from Seat 1, got Seat 3");
        assert_eq!(
            ConfigError::PlayerCount(4).to_string(),
            "Game requires 5-10 players, got 4"
        );
    }
}
