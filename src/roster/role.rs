//! Secret roles and party membership.

use serde::{Deserialize, Serialize};

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 5;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 10;

/// A player's secret role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Liberal,
    Fascist,
    Hitler,
}

impl Role {
    /// The party this role belongs to. Hitler is a member of the Fascist party.
    #[must_use]
    pub const fn party(self) -> Party {
        match self {
            Role::Liberal => Party::Liberal,
            Role::Fascist | Role::Hitler => Party::Fascist,
        }
    }

    #[must_use]
    pub const fn is_hitler(self) -> bool {
        matches!(self, Role::Hitler)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Liberal => write!(f, "Liberal"),
            Role::Fascist => write!(f, "Fascist"),
            Role::Hitler => write!(f, "Hitler"),
        }
    }
}

/// Party membership, as revealed by an investigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    Liberal,
    Fascist,
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Party::Liberal => write!(f, "Liberal"),
            Party::Fascist => write!(f, "Fascist"),
        }
    }
}

/// Number of regular Fascists (excluding Hitler) at a table of this size.
///
/// Returns `None` outside the supported 5..=10 range.
#[must_use]
pub fn fascist_count(player_count: usize) -> Option<usize> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        Some((player_count - 3) / 2)
    } else {
        None
    }
}

/// The unshuffled role set for a table: Hitler, then Fascists, then Liberals.
///
/// ```
/// use secret_hitler::roster::{role_distribution, Role};
///
/// let roles = role_distribution(7).unwrap();
/// assert_eq!(roles.iter().filter(|r| **r == Role::Fascist).count(), 2);
/// assert_eq!(roles.iter().filter(|r| **r == Role::Liberal).count(), 4);
/// ```
#[must_use]
pub fn role_distribution(player_count: usize) -> Option<Vec<Role>> {
    let fascists = fascist_count(player_count)?;
    let liberals = player_count - fascists - 1;

    let mut roles = Vec::with_capacity(player_count);
    roles.push(Role::Hitler);
    roles.extend(std::iter::repeat(Role::Fascist).take(fascists));
    roles.extend(std::iter::repeat(Role::Liberal).take(liberals));
    Some(roles)
}

/// Check that a seat-ordered role list matches the distribution for its size.
#[must_use]
pub fn is_valid_distribution(roles: &[Role]) -> bool {
    let Some(mut expected) = role_distribution(roles.len()) else {
        return false;
    };
    let mut actual = roles.to_vec();
    let key = |r: &Role| *r as u8;
    expected.sort_by_key(key);
    actual.sort_by_key(key);
    expected == actual
}
