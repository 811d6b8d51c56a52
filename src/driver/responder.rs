//! Decision sources.
//!
//! The engine never knows who answers a request. Anything implementing
//! `Responder` can sit at a seat: a console, an automated agent, or a
//! scripted test double.

use std::collections::VecDeque;

use crate::core::{DecisionKind, DecisionOption, DecisionRequest, DecisionResponse, GameRng};
use crate::view::PlayerView;

/// Answers decision requests for one seat.
pub trait Responder {
    /// Produce a response to `request`, given what the seat can see.
    fn respond(&mut self, request: &DecisionRequest, view: &PlayerView) -> DecisionResponse;
}

/// Picks uniformly among the legal options.
///
/// Discard claims are always truthful.
#[derive(Clone, Debug)]
pub struct RandomResponder {
    rng: GameRng,
    /// Chance of speaking rather than passing in a discussion.
    speak_probability: f64,
}

impl RandomResponder {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            speak_probability: 0.25,
        }
    }

    #[must_use]
    pub fn with_speak_probability(mut self, probability: f64) -> Self {
        self.speak_probability = probability.clamp(0.0, 1.0);
        self
    }
}

impl Responder for RandomResponder {
    fn respond(&mut self, request: &DecisionRequest, _view: &PlayerView) -> DecisionResponse {
        if request.kind == DecisionKind::Discussion {
            let option = if self.rng.chance(self.speak_probability) {
                DecisionOption::Speak
            } else {
                DecisionOption::Pass
            };
            let response = DecisionResponse::pick(request, option)
                .unwrap_or_else(|| DecisionResponse::new(0));
            return match option {
                DecisionOption::Speak => response.with_justification("I have nothing to hide."),
                _ => response,
            };
        }

        let choice = self.rng.below(request.options.len().max(1));
        let response = DecisionResponse::new(choice);
        match request.options.get(choice) {
            Some(&DecisionOption::Policy(discarded)) if request.kind.allows_claim() => {
                response.with_claim(discarded)
            }
            _ => response,
        }
    }
}

/// Replays a fixed queue of responses.
///
/// When the queue runs dry it passes where it can and otherwise takes the
/// first option.
#[derive(Clone, Debug, Default)]
pub struct ScriptedResponder {
    script: VecDeque<DecisionResponse>,
}

impl ScriptedResponder {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = DecisionResponse>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn push(&mut self, response: DecisionResponse) {
        self.script.push_back(response);
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Responder for ScriptedResponder {
    fn respond(&mut self, request: &DecisionRequest, _view: &PlayerView) -> DecisionResponse {
        self.script.pop_front().unwrap_or_else(|| {
            DecisionResponse::pick(request, DecisionOption::Pass)
                .unwrap_or_else(|| DecisionResponse::new(0))
        })
    }
}
