//! Slot-keyed piles: hand and void.
//!
//! Both are persistent maps from `Slot` to `OrderedCard`. Every transition
//! returns a new pile; the old one stays valid and shares structure with it.

use im::OrdMap;

use super::slot::{OrderedCard, Slot};

/// Cards in a seat's hand, keyed by slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    cards: OrdMap<Slot, OrderedCard>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `slot`, returning the new hand and the card.
    ///
    /// An absent slot yields an unchanged hand and `None`.
    #[must_use]
    pub fn extract(&self, slot: Slot) -> (Hand, Option<OrderedCard>) {
        match self.cards.extract(&slot) {
            Some((card, rest)) => (Hand { cards: rest }, Some(card)),
            None => (self.clone(), None),
        }
    }

    #[must_use]
    pub fn add(&self, card: OrderedCard) -> Hand {
        Hand {
            cards: self.cards.update(card.slot, card),
        }
    }

    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<&OrderedCard> {
        self.cards.get(&slot)
    }

    #[must_use]
    pub fn contains(&self, slot: Slot) -> bool {
        self.cards.contains_key(&slot)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in ascending slot order.
    pub fn iter(&self) -> impl Iterator<Item = &OrderedCard> {
        self.cards.values()
    }

    /// Slots in ascending order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.cards.keys().copied()
    }

    pub fn powers(&self) -> impl Iterator<Item = &OrderedCard> {
        self.iter().filter(|c| c.is_power())
    }

    pub fn non_powers(&self) -> impl Iterator<Item = &OrderedCard> {
        self.iter().filter(|c| !c.is_power())
    }
}

impl FromIterator<OrderedCard> for Hand {
    fn from_iter<I: IntoIterator<Item = OrderedCard>>(iter: I) -> Self {
        Hand {
            cards: iter.into_iter().map(|c| (c.slot, c)).collect(),
        }
    }
}

/// Discarded and spent cards, keyed by slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Void {
    cards: OrdMap<Slot, OrderedCard>,
}

impl Void {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `slot`, returning the new void and the card.
    #[must_use]
    pub fn extract(&self, slot: Slot) -> (Void, Option<OrderedCard>) {
        match self.cards.extract(&slot) {
            Some((card, rest)) => (Void { cards: rest }, Some(card)),
            None => (self.clone(), None),
        }
    }

    #[must_use]
    pub fn add(&self, card: OrderedCard) -> Void {
        Void {
            cards: self.cards.update(card.slot, card),
        }
    }

    #[must_use]
    pub fn contains(&self, slot: Slot) -> bool {
        self.cards.contains_key(&slot)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.cards.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId, Influence, Influences, PowerSource};
    use std::sync::Arc;

    fn filler(slot: u32) -> OrderedCard {
        OrderedCard::new(Slot::new(slot), Arc::new(Card::new(CardId::new(0), "Filler")))
    }

    fn power(slot: u32) -> OrderedCard {
        let card = Card::new(CardId::new(1), "Sigil")
            .with_power(PowerSource::new(Influences::of(Influence::Fire, 1)));
        OrderedCard::new(Slot::new(slot), Arc::new(card))
    }

    #[test]
    fn test_extract_keeps_original() {
        let hand: Hand = vec![filler(3), filler(1)].into_iter().collect();

        let (rest, card) = hand.extract(Slot::new(3));
        assert_eq!(card.unwrap().slot, Slot::new(3));
        assert_eq!(rest.len(), 1);
        // Previous snapshot untouched
        assert_eq!(hand.len(), 2);
        assert!(hand.contains(Slot::new(3)));
    }

    #[test]
    fn test_extract_missing_is_noop() {
        let hand: Hand = vec![filler(1)].into_iter().collect();
        let (rest, card) = hand.extract(Slot::new(9));

        assert!(card.is_none());
        assert_eq!(rest, hand);
    }

    #[test]
    fn test_slots_ascending() {
        let hand: Hand = vec![filler(5), power(2), filler(7)].into_iter().collect();

        let slots: Vec<_> = hand.slots().map(Slot::raw).collect();
        assert_eq!(slots, vec![2, 5, 7]);
        assert_eq!(hand.powers().count(), 1);
        assert_eq!(hand.non_powers().count(), 2);
    }

    #[test]
    fn test_void_add_and_extract() {
        let void = Void::new().add(filler(4));
        assert!(void.contains(Slot::new(4)));

        let (empty, card) = void.extract(Slot::new(4));
        assert!(card.is_some());
        assert!(empty.is_empty());
    }
}
