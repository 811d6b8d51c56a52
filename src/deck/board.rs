//! Liberal and Fascist policy tracks.

use serde::{Deserialize, Serialize};

use super::policy::Policy;

/// Liberal policies needed for a Liberal victory.
pub const LIBERAL_TRACK_SLOTS: u8 = 5;

/// Fascist policies needed for a Fascist victory.
pub const FASCIST_TRACK_SLOTS: u8 = 6;

/// Fascist policies after which electing Hitler chancellor wins the game.
pub const HITLER_ZONE: u8 = 3;

/// Enacted policy counts. Both only ever increase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tracks {
    pub liberal: u8,
    pub fascist: u8,
}

impl Tracks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place an enacted policy on its track and return the new count.
    pub fn enact(&mut self, policy: Policy) -> u8 {
        let slot = match policy {
            Policy::Liberal => &mut self.liberal,
            Policy::Fascist => &mut self.fascist,
        };
        *slot += 1;
        *slot
    }

    #[must_use]
    pub fn count(&self, policy: Policy) -> u8 {
        match policy {
            Policy::Liberal => self.liberal,
            Policy::Fascist => self.fascist,
        }
    }

    /// Cards that have left the deck onto the tracks.
    #[must_use]
    pub fn enacted_total(&self) -> usize {
        usize::from(self.liberal) + usize::from(self.fascist)
    }

    /// Whether electing Hitler chancellor now ends the game.
    #[must_use]
    pub fn in_hitler_zone(&self) -> bool {
        self.fascist >= HITLER_ZONE
    }
}
