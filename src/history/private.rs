//! Private knowledge with an expiry.
//!
//! Each record belongs to one player and is visible to that player only
//! while `turn <= expiry_turn`. Expired records are dropped whenever the
//! turn advances, so a snapshot never needs a timer.

use serde::{Deserialize, Serialize};

use super::event::EventId;
use crate::core::{PlayerId, PlayerMap};
use crate::deck::{Hand, Policy, Tracks};
use crate::legislature::Stage;
use crate::roster::Party;

/// Board context at the moment a record was created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernmentSnapshot {
    pub president: PlayerId,
    pub chancellor: Option<PlayerId>,
    pub tracks: Tracks,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrivateContent {
    /// What a president or chancellor really held, next to what they claimed.
    PolicyChoice {
        seat: Stage,
        seen: Hand,
        discarded: Policy,
        claimed: Option<Policy>,
        /// Cards handed to the chancellor, or the card enacted.
        passed: Hand,
        enacted: Option<Policy>,
    },
    /// Top of the draw pile, top first.
    PolicyPeek { upcoming: Hand },
    Investigation { target: PlayerId, party: Party },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateInfoRecord {
    pub owner: PlayerId,
    pub content: PrivateContent,
    pub created_turn: u32,
    pub expiry_turn: u32,
    pub related_event: Option<EventId>,
    pub government: GovernmentSnapshot,
}

impl PrivateInfoRecord {
    #[must_use]
    pub fn is_visible_at(&self, turn: u32) -> bool {
        turn <= self.expiry_turn
    }
}

/// Per-player private records.
#[derive(Clone, Debug)]
pub struct PrivateInfoStore {
    records: PlayerMap<Vec<PrivateInfoRecord>>,
}

impl PrivateInfoStore {
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            records: PlayerMap::with_default(player_count),
        }
    }

    /// Store a record created on `turn` that lives for `horizon` more turns.
    pub fn record(
        &mut self,
        owner: PlayerId,
        content: PrivateContent,
        turn: u32,
        horizon: u32,
        related_event: Option<EventId>,
        government: GovernmentSnapshot,
    ) {
        self.records[owner].push(PrivateInfoRecord {
            owner,
            content,
            created_turn: turn,
            expiry_turn: turn.saturating_add(horizon),
            related_event,
            government,
        });
    }

    /// Records `owner` may see on `turn`, oldest first.
    pub fn visible(&self, owner: PlayerId, turn: u32) -> impl Iterator<Item = &PrivateInfoRecord> {
        self.records
            .get(owner)
            .iter()
            .filter(move |r| r.is_visible_at(turn))
    }

    /// Drop everything expired by `turn`. Returns how many were removed.
    pub fn prune(&mut self, turn: u32) -> usize {
        let mut removed = 0;
        for (_, records) in self.records.iter_mut() {
            let before = records.len();
            records.retain(|r| r.is_visible_at(turn));
            removed += before - records.len();
        }
        removed
    }

    /// Live record count across all players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn government() -> GovernmentSnapshot {
        GovernmentSnapshot {
            president: PlayerId::new(0),
            chancellor: Some(PlayerId::new(1)),
            tracks: Tracks::new(),
        }
    }

    fn investigation(target: u8) -> PrivateContent {
        PrivateContent::Investigation {
            target: PlayerId::new(target),
            party: Party::Fascist,
        }
    }

    #[test]
    fn test_visible_only_to_owner_until_expiry() {
        let mut store = PrivateInfoStore::new(5);
        store.record(PlayerId::new(0), investigation(3), 2, 3, None, government());

        assert_eq!(store.visible(PlayerId::new(0), 2).count(), 1);
        assert_eq!(store.visible(PlayerId::new(0), 5).count(), 1);
        assert_eq!(store.visible(PlayerId::new(0), 6).count(), 0);
        assert_eq!(store.visible(PlayerId::new(1), 2).count(), 0);
    }

    #[test]
    fn test_prune_drops_expired() {
        let mut store = PrivateInfoStore::new(5);
        store.record(PlayerId::new(0), investigation(3), 1, 1, None, government());
        store.record(PlayerId::new(2), investigation(4), 2, 3, Some(EventId(7)), government());

        assert_eq!(store.prune(2), 0);
        assert_eq!(store.prune(3), 1);
        assert_eq!(store.len(), 1);

        let kept = store.visible(PlayerId::new(2), 3).next().unwrap();
        assert_eq!(kept.expiry_turn, 5);
        assert_eq!(kept.related_event, Some(EventId(7)));
    }

    #[test]
    fn test_zero_horizon_lasts_the_creation_turn() {
        let mut store = PrivateInfoStore::new(5);
        store.record(
            PlayerId::new(1),
            PrivateContent::PolicyPeek {
                upcoming: std::iter::repeat(Policy::Fascist).take(3).collect(),
            },
            4,
            0,
            None,
            government(),
        );
        assert_eq!(store.visible(PlayerId::new(1), 4).count(), 1);
        assert_eq!(store.prune(5), 1);
        assert!(store.is_empty());
    }
}
