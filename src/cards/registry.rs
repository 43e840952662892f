//! Card definitions by ID.
//!
//! Binding a deck list to a seat resolves every ID here once; the resulting
//! `Arc<Card>` is then shared by that slot across every later snapshot.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::core::{EngineError, Result};

use super::definition::{Card, CardId};

/// Card definitions available to a match.
///
/// ```
/// use eternal_sim::cards::{Card, CardId, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry.register(Card::new(CardId::new(1), "Filler"));
///
/// assert_eq!(registry.resolve(CardId::new(1)).unwrap().name, "Filler");
/// assert!(registry.resolve(CardId::new(2)).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Arc<Card>>,
}

impl CardRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition.
    ///
    /// # Panics
    ///
    /// Panics if the ID is taken.
    pub fn register(&mut self, card: Card) {
        if self.cards.contains_key(&card.id) {
            panic!("{} '{}' already registered", card.id, card.name);
        }
        self.cards.insert(card.id, Arc::new(card));
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Arc<Card>> {
        self.cards.get(&id)
    }

    /// Shared handle for binding into a slot.
    pub fn resolve(&self, id: CardId) -> Result<Arc<Card>> {
        self.get(id).cloned().ok_or(EngineError::UnknownCard(id))
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
