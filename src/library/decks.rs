//! Reference decklists.

use crate::cards::{Deck, DeckRegistry};

use super::cards::{JUST_CARD, JUST_POWER, SEEK_POWER};

pub const EMPTY_75: &str = "empty-75";
pub const EMPTY_WITH_SEEK: &str = "empty-with-seek";

/// `empty-75` and `empty-with-seek`.
#[must_use]
pub fn reference_decks() -> DeckRegistry {
    let mut registry = DeckRegistry::new();
    registry.register(Deck::new(EMPTY_75).with(25, JUST_POWER).with(50, JUST_CARD));
    registry.register(
        Deck::new(EMPTY_WITH_SEEK)
            .with(25, JUST_POWER)
            .with(4, SEEK_POWER)
            .with(46, JUST_CARD),
    );
    registry
}
