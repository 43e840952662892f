//! Card system: influence, definitions, decks, and registries.
//!
//! ## Key Types
//!
//! - `Influence` / `Influences`: the five colors plus gray power
//! - `Requirements`: a card's play cost
//! - `Card`: static card data with optional power-source and summon capabilities
//! - `CardRegistry`: card definition lookup
//! - `Deck` / `DeckRegistry`: named decklists

pub mod influence;
pub mod definition;
pub mod registry;
pub mod deck;

pub use influence::{Influence, Influences, Requirements};
pub use definition::{Card, CardId, PowerSource, SummonTrigger};
pub use registry::CardRegistry;
pub use deck::{Deck, DeckRegistry};
