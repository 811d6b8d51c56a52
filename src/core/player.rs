//! Seats at the table.
//!
//! Players are named by seat. Seat order is fixed when the game starts and
//! is the order the presidency travels in, skipping the dead.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A seat at the table, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    #[must_use]
    pub const fn seat(self) -> usize {
        self.0 as usize
    }

    /// Every seat at a table of `player_count`.
    ///
    /// ```
    /// use secret_hitler::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(5).collect();
    /// assert_eq!(seats.last(), Some(&PlayerId::new(4)));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count).map(|seat| PlayerId(seat as u8))
    }

    /// The other seats, walking clockwise from the one after `self` and
    /// wrapping around the table.
    pub fn clockwise(self, player_count: usize) -> impl Iterator<Item = PlayerId> {
        let from = self.seat();
        (1..player_count).map(move |step| PlayerId(((from + step) % player_count) as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// One value per seat, indexed by `PlayerId`.
///
/// ```
/// use secret_hitler::core::{PlayerId, PlayerMap};
///
/// let mut votes: PlayerMap<Option<bool>> = PlayerMap::with_default(5);
/// votes[PlayerId::new(2)] = Some(true);
/// assert_eq!(votes.values().flatten().count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Fill every seat from `init`.
    pub fn new(player_count: usize, init: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            seats: PlayerId::all(player_count).map(init).collect(),
        }
    }

    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Whether `player` is a seat at this table.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.seat() < self.seats.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.seats[player.seat()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.seats[player.seat()]
    }

    /// Seats and their values in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.seats.iter().enumerate().map(|(seat, v)| (PlayerId(seat as u8), v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.seats.iter_mut().enumerate().map(|(seat, v)| (PlayerId(seat as u8), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.seats.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        self.get_mut(player)
    }
}
