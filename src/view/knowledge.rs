//! Who knows whose role.
//!
//! | Viewer  | 5-6 players                  | 7-10 players                 |
//! |---------|------------------------------|------------------------------|
//! | Liberal | self                         | self                         |
//! | Fascist | every Fascist and Hitler     | every Fascist and Hitler     |
//! | Hitler  | every Fascist                | self                         |
//!
//! Hitler learns the Fascists only at 5-6 players, where the Fascist team
//! is a single player. From seven players up Hitler never learns teammates.
//!
//! Once the game is over every role is public.

use crate::core::PlayerId;
use crate::roster::{PlayerRegistry, Role};

/// Largest table at which Hitler knows the Fascists.
pub const HITLER_KNOWS_TEAM_MAX_PLAYERS: usize = 6;

/// Roles `viewer` is entitled to see, in seat order.
#[must_use]
pub fn known_roles(
    registry: &PlayerRegistry,
    viewer: PlayerId,
    reveal_all: bool,
) -> Vec<(PlayerId, Role)> {
    let own = registry.role(viewer);
    let sees_fascists = match own {
        Role::Liberal => false,
        Role::Fascist => true,
        Role::Hitler => registry.player_count() <= HITLER_KNOWS_TEAM_MAX_PLAYERS,
    };

    registry
        .iter()
        .filter(|p| reveal_all || p.id == viewer || (sees_fascists && p.role() != Role::Liberal))
        .map(|p| (p.id, p.role()))
        .collect()
}

/// Roles visible to a spectator: none until the game ends.
#[must_use]
pub fn public_roles(registry: &PlayerRegistry, reveal_all: bool) -> Vec<(PlayerId, Role)> {
    if !reveal_all {
        return Vec::new();
    }
    registry.iter().map(|p| (p.id, p.role())).collect()
}
