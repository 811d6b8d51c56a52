//! Append-only public event log.
//!
//! Events are the only channel through which private actions become public.
//! The log is an `im::Vector` so a snapshot can share it without copying.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::deck::Policy;
use crate::game::Phase;
use crate::government::{Ballot, Government, Tally};
use crate::powers::ExecutivePower;
use crate::rules::GameResult;

/// Position of an event in the log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(pub u32);

impl EventId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// What happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    GameStarted {
        players: usize,
        first_president: PlayerId,
    },
    Nominated {
        president: PlayerId,
        chancellor: PlayerId,
    },
    /// A ballot exists. Its content stays hidden until the result.
    BallotCast,
    ElectionResult {
        government: Government,
        ballots: Vec<Ballot>,
        tally: Tally,
        passed: bool,
        /// Consecutive rejections after this result.
        rejections: usize,
    },
    /// `claim` is the president's public statement, not the truth.
    PresidentDiscarded { claim: Option<Policy> },
    PolicyEnacted {
        policy: Policy,
        claim: Option<Policy>,
        /// Enacted from the top of the deck after repeated rejections.
        chaos: bool,
    },
    PowerUsed {
        power: ExecutivePower,
        target: Option<PlayerId>,
    },
    /// `None` when the player passed.
    Discussion { message: Option<String> },
    GameEnded { result: GameResult },
}

impl EventKind {
    /// Short category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            EventKind::GameStarted { .. } | EventKind::GameEnded { .. } => "game",
            EventKind::Nominated { .. } => "nomination",
            EventKind::BallotCast => "vote",
            EventKind::ElectionResult { .. } => "election result",
            EventKind::PresidentDiscarded { .. } | EventKind::PolicyEnacted { .. } => "enactment",
            EventKind::PowerUsed { .. } => "power use",
            EventKind::Discussion { .. } => "discussion",
        }
    }
}

/// One immutable log entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub turn: u32,
    pub phase: Phase,
    pub actor: Option<PlayerId>,
    pub kind: EventKind,
    /// Public justification supplied with the decision.
    pub justification: Option<String>,
    /// Earlier event this one answers or continues.
    pub related: Option<EventId>,
}

/// An event before the log assigns its id, turn and phase.
#[derive(Clone, Debug)]
pub struct EventDraft {
    actor: Option<PlayerId>,
    kind: EventKind,
    justification: Option<String>,
    related: Option<EventId>,
}

impl EventDraft {
    #[must_use]
    pub fn new(kind: EventKind) -> Self {
        Self {
            actor: None,
            kind,
            justification: None,
            related: None,
        }
    }

    #[must_use]
    pub fn by(mut self, actor: PlayerId) -> Self {
        self.actor = Some(actor);
        self
    }

    #[must_use]
    pub fn justified(mut self, justification: Option<String>) -> Self {
        self.justification = justification;
        self
    }

    #[must_use]
    pub fn related(mut self, related: Option<EventId>) -> Self {
        self.related = related;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vector<Event>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event and return its id.
    pub fn append(&mut self, turn: u32, phase: Phase, draft: EventDraft) -> EventId {
        // Ids are dense and start at zero.
        let id = EventId(self.events.len() as u32);
        self.events.push_back(Event {
            id,
            turn,
            phase,
            actor: draft.actor,
            kind: draft.kind,
            justification: draft.justification,
            related: draft.related,
        });
        id
    }

    #[must_use]
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.get(id.index())
    }

    #[must_use]
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Events from `turn` onward.
    pub fn since_turn(&self, turn: u32) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.turn >= turn)
    }

    /// Cheap shared copy of the whole log.
    #[must_use]
    pub fn snapshot(&self) -> Vector<Event> {
        self.events.clone()
    }
}
