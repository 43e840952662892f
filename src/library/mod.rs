//! Reference content.
//!
//! ## Key Types
//!
//! - `Catalog`: the cards, decks and policies a `MatchConfig` can name
//! - `reference_cards` / `reference_decks`: the built-in content

pub mod cards;
pub mod catalog;
pub mod decks;

pub use cards::{reference_cards, sigil, JUST_CARD, JUST_POWER, SEEK_POWER};
pub use catalog::Catalog;
pub use decks::{reference_decks, EMPTY_75, EMPTY_WITH_SEEK};
