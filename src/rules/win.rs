//! Win conditions.
//!
//! Checked at three points: after every enactment (track totals), when an
//! election passes (Hitler as chancellor inside the Hitler zone), and after
//! every execution (Hitler killed). The first condition reached ends the game.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::deck::{Tracks, FASCIST_TRACK_SLOTS, LIBERAL_TRACK_SLOTS};
use crate::roster::{Party, Role};

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    LiberalPolicies,
    FascistPolicies,
    HitlerElected,
    HitlerExecuted,
}

impl std::fmt::Display for WinReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinReason::LiberalPolicies => write!(f, "five Liberal policies enacted"),
            WinReason::FascistPolicies => write!(f, "six Fascist policies enacted"),
            WinReason::HitlerElected => write!(f, "Hitler elected chancellor"),
            WinReason::HitlerExecuted => write!(f, "Hitler executed"),
        }
    }
}

/// Result of a completed game. Always a team win; there are no draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Party,
    pub reason: WinReason,
}

impl GameResult {
    #[must_use]
    pub const fn new(reason: WinReason) -> Self {
        let winner = match reason {
            WinReason::LiberalPolicies | WinReason::HitlerExecuted => Party::Liberal,
            WinReason::FascistPolicies | WinReason::HitlerElected => Party::Fascist,
        };
        Self { winner, reason }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} win: {}", self.winner, self.reason)
    }
}

/// Stateless win checks.
pub struct WinConditionEvaluator;

impl WinConditionEvaluator {
    /// After a policy lands on a track.
    #[must_use]
    pub fn after_enactment(tracks: &Tracks) -> Option<GameResult> {
        let reason = if tracks.liberal >= LIBERAL_TRACK_SLOTS {
            WinReason::LiberalPolicies
        } else if tracks.fascist >= FASCIST_TRACK_SLOTS {
            WinReason::FascistPolicies
        } else {
            return None;
        };
        Some(Self::finish(reason))
    }

    /// When an election passes, with the track as it stood at the vote.
    #[must_use]
    pub fn after_election(tracks: &Tracks, chancellor: Role) -> Option<GameResult> {
        (chancellor.is_hitler() && tracks.in_hitler_zone())
            .then(|| Self::finish(WinReason::HitlerElected))
    }

    /// After an execution resolves.
    #[must_use]
    pub fn after_execution(was_hitler: bool) -> Option<GameResult> {
        was_hitler.then(|| Self::finish(WinReason::HitlerExecuted))
    }

    fn finish(reason: WinReason) -> GameResult {
        let result = GameResult::new(reason);
        info!(winner = %result.winner, reason = %reason, "Win condition reached");
        result
    }
}
