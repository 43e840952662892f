//! Slot identity for cards in a seat's deck.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Position of a card in its deck's canonical list.
///
/// Assigned once when a deck is bound to a seat and never changed; it is
/// the card's identity in deck, hand and void alike. Turn indices and seat
/// indices are different types so they cannot be mixed up with a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot(pub u32);

impl Slot {
    #[must_use]
    pub const fn new(slot: u32) -> Self {
        Self(slot)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A card bound to its slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderedCard {
    pub slot: Slot,
    pub card: Arc<Card>,
}

impl OrderedCard {
    #[must_use]
    pub fn new(slot: Slot, card: Arc<Card>) -> Self {
        Self { slot, card }
    }

    #[must_use]
    pub fn is_power(&self) -> bool {
        self.card.is_power()
    }
}

impl std::fmt::Display for OrderedCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.card, self.slot)
    }
}
