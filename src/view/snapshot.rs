//! Viewer-scoped snapshot of a game.
//!
//! `PlayerView` is a pure projection of `Game` for one seat (or for a
//! spectator). It carries everything public, the roles the viewer is
//! entitled to know, the viewer's own unexpired private records, and the
//! pending decision if it is theirs. Nothing in it can leak another
//! player's private information.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::knowledge::{known_roles, public_roles};
use crate::core::{DecisionRequest, PlayerId};
use crate::deck::Tracks;
use crate::game::{Game, Phase};
use crate::government::Government;
use crate::history::{Event, PrivateInfoRecord};
use crate::roster::Role;
use crate::rules::GameResult;

/// Public facts about one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub id: PlayerId,
    pub name: String,
    pub alive: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    /// `None` for a spectator.
    pub viewer: Option<PlayerId>,
    pub turn: u32,
    pub phase: Phase,
    pub tracks: Tracks,
    pub players: Vec<SeatView>,
    pub your_role: Option<Role>,
    /// Roles this viewer knows, own role included, in seat order.
    pub known_roles: Vec<(PlayerId, Role)>,
    pub president: PlayerId,
    pub nominee: Option<PlayerId>,
    pub chancellor: Option<PlayerId>,
    pub last_government: Option<Government>,
    pub rejections: usize,
    pub chaos_threshold: usize,
    pub draw_pile: usize,
    pub discard_pile: usize,
    pub events: Vector<Event>,
    pub private_info: Vec<PrivateInfoRecord>,
    /// The outstanding decision, only when it belongs to this viewer.
    pub pending: Option<DecisionRequest>,
    pub result: Option<GameResult>,
}

impl PlayerView {
    /// Project `game` for `viewer`.
    #[must_use]
    pub fn project(game: &Game, viewer: Option<PlayerId>) -> Self {
        let registry = game.registry();
        let tracker = game.government();
        let over = game.is_over();
        let turn = game.turn();

        let viewer = viewer.filter(|&id| registry.contains(id));
        let (your_role, known, private_info, pending) = match viewer {
            Some(id) => (
                Some(registry.role(id)),
                known_roles(registry, id, over),
                game.private_info().visible(id, turn).cloned().collect(),
                game.pending().filter(|r| r.player == id).cloned(),
            ),
            None => (None, public_roles(registry, over), Vec::new(), None),
        };

        Self {
            viewer,
            turn,
            phase: game.phase(),
            tracks: *game.tracks(),
            players: registry
                .iter()
                .map(|p| SeatView {
                    id: p.id,
                    name: p.name.clone(),
                    alive: p.alive,
                })
                .collect(),
            your_role,
            known_roles: known,
            president: tracker.president(),
            nominee: tracker.nominee(),
            chancellor: tracker.chancellor(),
            last_government: tracker.last_elected(),
            rejections: tracker.rejections(),
            chaos_threshold: game.config().chaos_threshold.resolve(registry.living_count()),
            draw_pile: game.deck().draw_len(),
            discard_pile: game.deck().discard_len(),
            events: game.events().snapshot(),
            private_info,
            pending,
            result: game.result(),
        }
    }

    /// Role of `player` if this viewer knows it.
    #[must_use]
    pub fn role_of(&self, player: PlayerId) -> Option<Role> {
        self.known_roles
            .iter()
            .find(|(id, _)| *id == player)
            .map(|(_, role)| *role)
    }

    #[must_use]
    pub fn living(&self) -> Vec<PlayerId> {
        self.players.iter().filter(|p| p.alive).map(|p| p.id).collect()
    }
}
