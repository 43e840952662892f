//! Named decklists.
//!
//! A `Deck` is the canonical, pre-shuffle list of card IDs. Position `i`
//! in the list becomes slot `i` once the deck is bound to a seat.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Result};

use super::definition::CardId;

/// A named, ordered list of card IDs.
///
/// ```
/// use eternal_sim::cards::{CardId, Deck};
///
/// let deck = Deck::new("tiny").with(2, CardId::new(0)).with(1, CardId::new(1));
/// assert_eq!(deck.cards, vec![CardId::new(0), CardId::new(0), CardId::new(1)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub cards: Vec<CardId>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
        }
    }

    /// Append `count` copies of `card`.
    #[must_use]
    pub fn with(mut self, count: usize, card: CardId) -> Self {
        self.cards.extend(std::iter::repeat(card).take(count));
        self
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

/// Registry of decks by name.
#[derive(Clone, Debug, Default)]
pub struct DeckRegistry {
    decks: FxHashMap<String, Deck>,
}

impl DeckRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a deck under its own name.
    ///
    /// Panics if the name is already taken.
    pub fn register(&mut self, deck: Deck) {
        if self.decks.contains_key(&deck.name) {
            panic!("Deck '{}' already registered", deck.name);
        }
        self.decks.insert(deck.name.clone(), deck);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Deck> {
        self.decks.get(name)
    }

    /// Look up a deck, or `UnknownDeck`.
    pub fn resolve(&self, name: &str) -> Result<&Deck> {
        self.decks
            .get(name)
            .ok_or_else(|| EngineError::UnknownDeck(name.to_string()))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.decks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_resolve() {
        let mut registry = DeckRegistry::new();
        registry.register(Deck::new("a").with(3, CardId::new(1)));
        registry.register(Deck::new("b"));

        assert_eq!(registry.resolve("a").unwrap().len(), 3);
        assert!(registry.resolve("b").unwrap().is_empty());
        assert_eq!(registry.names(), vec!["a", "b"]);
        assert_eq!(
            registry.resolve("c").unwrap_err(),
            EngineError::UnknownDeck("c".to_string())
        );
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_name_panics() {
        let mut registry = DeckRegistry::new();
        registry.register(Deck::new("a"));
        registry.register(Deck::new("a"));
    }
}
