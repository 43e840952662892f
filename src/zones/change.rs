//! Zone transfer primitive.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, PlayerId, Result};

use super::slot::Slot;

/// A seat-owned card container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Deck,
    Hand,
    Void,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Where a moved card can land. The deck is never a destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Landing {
    Hand,
    Void,
}

impl From<Landing> for Zone {
    fn from(landing: Landing) -> Self {
        match landing {
            Landing::Hand => Zone::Hand,
            Landing::Void => Zone::Void,
        }
    }
}

/// Move of one slot between two of a seat's zones.
///
/// Built either through the checked [`ZoneChange::new`], which rejects the
/// deck as a destination, or through the named constructors the reducer
/// uses, which cannot express that move at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoneChange {
    pub player: PlayerId,
    pub slot: Slot,
    pub from: Zone,
    pub to: Landing,
}

impl ZoneChange {
    /// Checked constructor.
    ///
    /// ```
    /// use eternal_sim::core::PlayerId;
    /// use eternal_sim::zones::{Slot, Zone, ZoneChange};
    ///
    /// let p = PlayerId::new(0);
    /// assert!(ZoneChange::new(p, Slot::new(1), Zone::Hand, Zone::Void).is_ok());
    /// assert!(ZoneChange::new(p, Slot::new(1), Zone::Hand, Zone::Deck).is_err());
    /// ```
    pub fn new(player: PlayerId, slot: Slot, from: Zone, to: Zone) -> Result<Self> {
        let to = match to {
            Zone::Hand => Landing::Hand,
            Zone::Void => Landing::Void,
            Zone::Deck => return Err(EngineError::DeckDestination { player, slot, from }),
        };
        Ok(Self {
            player,
            slot,
            from,
            to,
        })
    }

    /// Deck to hand: draws and tutors.
    #[must_use]
    pub fn draw(player: PlayerId, slot: Slot) -> Self {
        Self {
            player,
            slot,
            from: Zone::Deck,
            to: Landing::Hand,
        }
    }

    /// Hand to void: discards and spent plays.
    #[must_use]
    pub fn discard(player: PlayerId, slot: Slot) -> Self {
        Self {
            player,
            slot,
            from: Zone::Hand,
            to: Landing::Void,
        }
    }
}
