//! Zone containers for card locations.
//!
//! Every card a seat owns is in exactly one of its deck, hand or void,
//! identified by the `Slot` it was given when the deck was bound.
//!
//! ## Key Types
//!
//! - `Slot` / `OrderedCard`: stable card identity within a seat
//! - `Hand`, `Void`: slot-keyed persistent maps
//! - `OrderedDeck`: persistent sequence, top first
//! - `Zone` / `ZoneChange`: the single transfer primitive

pub mod slot;
pub mod pile;
pub mod deck;
pub mod change;

pub use slot::{OrderedCard, Slot};
pub use pile::{Hand, Void};
pub use deck::OrderedDeck;
pub use change::{Landing, Zone, ZoneChange};
