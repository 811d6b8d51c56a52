//! Decision protocol between the engine and whoever drives it.
//!
//! The engine publishes one `DecisionRequest` at a time: what kind of
//! decision, from which seat, and the closed set of legal options. A
//! driver answers with a `DecisionResponse` naming an option by index,
//! plus optional free text and (for policy discards) an optional public
//! claim. The engine never cares how the answer was produced.

use serde::{Deserialize, Serialize};

use super::error::DecisionError;
use super::player::PlayerId;
use crate::deck::Policy;
use crate::powers::ExecutivePower;

/// What is being decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionKind {
    /// President picks a chancellor candidate.
    Nomination,
    /// A living player votes on the nominated government.
    Vote,
    /// President discards one of three drawn policies.
    PresidentDiscard,
    /// Chancellor discards one of two policies, enacting the other.
    ChancellorDiscard,
    /// President picks the target of an executive power.
    PowerTarget(ExecutivePower),
    /// A player may speak or pass during discussion.
    Discussion,
}

impl DecisionKind {
    /// Discard decisions accept a public claim about the discarded card.
    #[must_use]
    pub const fn allows_claim(self) -> bool {
        matches!(self, DecisionKind::PresidentDiscard | DecisionKind::ChancellorDiscard)
    }
}

/// One legal answer to a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionOption {
    Player(PlayerId),
    Ja,
    Nein,
    /// Discard a card of this type from the hand.
    Policy(Policy),
    Speak,
    Pass,
}

/// The single outstanding decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRequest {
    pub kind: DecisionKind,
    pub player: PlayerId,
    pub options: Vec<DecisionOption>,
    pub turn: u32,
}

impl DecisionRequest {
    #[must_use]
    pub fn new(
        kind: DecisionKind,
        player: PlayerId,
        options: Vec<DecisionOption>,
        turn: u32,
    ) -> Self {
        Self {
            kind,
            player,
            options,
            turn,
        }
    }

    /// Index of an option, if it is legal.
    #[must_use]
    pub fn index_of(&self, option: DecisionOption) -> Option<usize> {
        self.options.iter().position(|&o| o == option)
    }

    /// Check a response against this request.
    ///
    /// Returns the selected option on success.
    pub fn validate(
        &self,
        player: PlayerId,
        response: &DecisionResponse,
    ) -> Result<DecisionOption, DecisionError> {
        if player != self.player {
            return Err(DecisionError::WrongPlayer {
                expected: self.player,
                actual: player,
            });
        }

        let option = *self
            .options
            .get(response.choice)
            .ok_or(DecisionError::ChoiceOutOfRange {
                choice: response.choice,
                options: self.options.len(),
            })?;

        if response.claim.is_some() && !self.kind.allows_claim() {
            return Err(DecisionError::UnexpectedClaim);
        }

        if option == DecisionOption::Speak && response.message().is_none() {
            return Err(DecisionError::MissingMessage);
        }

        Ok(option)
    }
}

/// A driver's answer to a `DecisionRequest`.
///
/// ```
/// use secret_hitler::core::DecisionResponse;
/// use secret_hitler::deck::Policy;
///
/// let response = DecisionResponse::new(1)
///     .with_claim(Policy::Liberal)
///     .with_justification("Drew two fascists and a liberal");
/// assert_eq!(response.choice, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecisionResponse {
    /// Index into the request's option list.
    pub choice: usize,

    /// Public claim about the discarded policy. Never affects game state.
    pub claim: Option<Policy>,

    /// Public justification, or the message when speaking.
    pub justification: Option<String>,
}

impl DecisionResponse {
    #[must_use]
    pub fn new(choice: usize) -> Self {
        Self {
            choice,
            claim: None,
            justification: None,
        }
    }

    /// Respond with a specific option. `None` if the option is not legal.
    #[must_use]
    pub fn pick(request: &DecisionRequest, option: DecisionOption) -> Option<Self> {
        request.index_of(option).map(Self::new)
    }

    #[must_use]
    pub fn with_claim(mut self, claim: Policy) -> Self {
        self.claim = Some(claim);
        self
    }

    #[must_use]
    pub fn with_justification(mut self, text: impl Into<String>) -> Self {
        self.justification = Some(text.into());
        self
    }

    /// Non-blank justification text.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.justification
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// An accepted decision, recorded for replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub player: PlayerId,
    pub response: DecisionResponse,
    pub turn: u32,
    /// Position in the game's full decision sequence.
    pub sequence: u32,
}
