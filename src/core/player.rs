//! Seats.
//!
//! A `PlayerId` names a configured seat: seat `i` is the `i`-th entry of
//! `MatchConfig::seats`. Who moves first is decided separately, by the
//! shuffled turn order in the `SetupLog`.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Most seats one match can hold.
pub const MAX_SEATS: usize = u8::MAX as usize;

/// Seat number, stable for the whole match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Position in `MatchConfig::seats`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One value per seat, indexed by `PlayerId`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Entry `i` belongs to `PlayerId(i)`.
    ///
    /// # Panics
    ///
    /// Panics with more than [`MAX_SEATS`] seats.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(data.len() <= MAX_SEATS, "At most 255 seats supported");
        Self { data }
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Seats in seat order, not turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.player_ids().zip(self.data.iter())
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}
