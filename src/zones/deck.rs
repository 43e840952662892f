//! Ordered deck: remaining cards, top first.

use im::Vector;

use super::slot::{OrderedCard, Slot};

/// A seat's remaining deck.
///
/// Logically ordered, with the top as the first element. Any slot can be
/// extracted wherever it sits, which is how tutoring works.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderedDeck {
    cards: Vector<OrderedCard>,
}

impl OrderedDeck {
    #[must_use]
    pub fn new(cards: Vec<OrderedCard>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Remove `slot` wherever it sits.
    ///
    /// An absent slot yields an unchanged deck and `None`.
    #[must_use]
    pub fn extract(&self, slot: Slot) -> (OrderedDeck, Option<OrderedCard>) {
        match self.position(slot) {
            Some(index) => {
                let mut cards = self.cards.clone();
                let card = cards.remove(index);
                (OrderedDeck { cards }, Some(card))
            }
            None => (self.clone(), None),
        }
    }

    /// Slot of the top card.
    #[must_use]
    pub fn top(&self) -> Option<Slot> {
        self.cards.front().map(|c| c.slot)
    }

    /// Cards matching `predicate`, top first.
    pub fn find<'a, F>(&'a self, predicate: F) -> impl Iterator<Item = &'a OrderedCard> + 'a
    where
        F: Fn(&OrderedCard) -> bool + 'a,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }

    #[must_use]
    pub fn contains(&self, slot: Slot) -> bool {
        self.position(slot).is_some()
    }

    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<&OrderedCard> {
        self.cards.iter().find(|c| c.slot == slot)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards top first.
    pub fn iter(&self) -> impl Iterator<Item = &OrderedCard> {
        self.cards.iter()
    }

    fn position(&self, slot: Slot) -> Option<usize> {
        self.cards.iter().position(|c| c.slot == slot)
    }
}
