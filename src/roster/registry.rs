//! Player identities, roles, and alive/dead status.

use serde::{Deserialize, Serialize};

use super::role::{Party, Role};
use crate::core::{PlayerId, PlayerMap};

/// A seated player.
///
/// The role is fixed at assignment; only `alive` ever changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    role: Role,
    pub alive: bool,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            alive: true,
        }
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn party(&self) -> Party {
        self.role.party()
    }
}

/// Registry of every seat at the table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerRegistry {
    players: PlayerMap<Player>,
}

impl PlayerRegistry {
    /// Seat players in the given order with their seat-aligned roles.
    ///
    /// Panics if `names` and `roles` differ in length; callers validate first.
    #[must_use]
    pub fn new(names: &[String], roles: &[Role]) -> Self {
        assert_eq!(names.len(), roles.len(), "One role per seat");
        let players = PlayerMap::new(names.len(), |id| {
            Player::new(id, names[id.seat()].clone(), roles[id.seat()])
        });
        Self { players }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.contains(id)
    }

    #[must_use]
    pub fn get(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn role(&self, id: PlayerId) -> Role {
        self.players[id].role
    }

    #[must_use]
    pub fn name(&self, id: PlayerId) -> &str {
        &self.players[id].name
    }

    #[must_use]
    pub fn is_alive(&self, id: PlayerId) -> bool {
        self.contains(id) && self.players[id].alive
    }

    /// Mark a player dead. Returns false if they were already dead.
    pub fn kill(&mut self, id: PlayerId) -> bool {
        let player = &mut self.players[id];
        std::mem::replace(&mut player.alive, false)
    }

    /// All players in seat order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// Living players in seat order.
    pub fn living(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .filter(|(_, p)| p.alive)
            .map(|(id, _)| id)
    }

    #[must_use]
    pub fn living_count(&self) -> usize {
        self.living().count()
    }

    /// The Hitler seat. Every valid table has exactly one.
    #[must_use]
    pub fn hitler(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, p)| p.role.is_hitler())
            .map(|(id, _)| id)
    }

    /// Seats holding the given role.
    pub fn with_role(&self, role: Role) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .filter(move |(_, p)| p.role == role)
            .map(|(id, _)| id)
    }

    /// The next living seat clockwise from `from` (exclusive).
    #[must_use]
    pub fn next_living_after(&self, from: PlayerId) -> Option<PlayerId> {
        from.clockwise(self.player_count())
            .find(|&id| self.players[id].alive)
    }

    /// Living players clockwise starting at `start` (inclusive).
    #[must_use]
    pub fn living_from(&self, start: PlayerId) -> Vec<PlayerId> {
        std::iter::once(start)
            .chain(start.clockwise(self.player_count()))
            .filter(|&id| self.players[id].alive)
            .collect()
    }
}
