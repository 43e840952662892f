//! Per-seat state.
//!
//! `PlayerState` is replaced wholesale on every event that touches a seat.
//! Transitions go through `PlayerStateBuilder`, which starts as a copy of
//! the source state and is consumed once.

use crate::zones::{Hand, Landing, OrderedDeck, Slot, Void, Zone, ZoneChange};

use super::power::PowerState;

/// Everything one seat owns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerState {
    pub hand: Hand,
    pub deck: OrderedDeck,
    pub void: Void,
    pub power: PowerState,
    /// A power card was played this turn.
    pub power_played: bool,
}

/// Local builder for one `PlayerState` transition.
#[derive(Clone, Debug)]
pub struct PlayerStateBuilder {
    pub hand: Hand,
    pub deck: OrderedDeck,
    pub void: Void,
    pub power: PowerState,
    pub power_played: bool,
}

impl PlayerStateBuilder {
    #[must_use]
    pub fn build(self) -> PlayerState {
        PlayerState {
            hand: self.hand,
            deck: self.deck,
            void: self.void,
            power: self.power,
            power_played: self.power_played,
        }
    }
}

impl PlayerState {
    /// Opening state for a hand/deck split.
    #[must_use]
    pub fn new(hand: Hand, deck: OrderedDeck) -> Self {
        Self {
            hand,
            deck,
            ..Self::default()
        }
    }

    /// Builder pre-populated from this state.
    #[must_use]
    pub fn builder(&self) -> PlayerStateBuilder {
        PlayerStateBuilder {
            hand: self.hand.clone(),
            deck: self.deck.clone(),
            void: self.void.clone(),
            power: self.power,
            power_played: self.power_played,
        }
    }

    /// Apply a zone move.
    ///
    /// A slot absent from the source zone leaves the state unchanged.
    #[must_use]
    pub fn change(&self, change: &ZoneChange) -> PlayerState {
        let mut builder = self.builder();
        let card = match change.from {
            Zone::Deck => {
                let (deck, card) = self.deck.extract(change.slot);
                builder.deck = deck;
                card
            }
            Zone::Hand => {
                let (hand, card) = self.hand.extract(change.slot);
                builder.hand = hand;
                card
            }
            Zone::Void => {
                let (void, card) = self.void.extract(change.slot);
                builder.void = void;
                card
            }
        };
        let Some(card) = card else {
            return self.clone();
        };
        match change.to {
            Landing::Hand => builder.hand = builder.hand.add(card),
            Landing::Void => builder.void = builder.void.add(card),
        }
        builder.build()
    }

    /// Whether the card at `slot` may be played now.
    ///
    /// Power cards need the once-per-turn allowance; anything else needs
    /// its cost covered.
    #[must_use]
    pub fn can_play(&self, slot: Slot) -> bool {
        match self.hand.get(slot) {
            None => false,
            Some(card) if card.is_power() => !self.power_played,
            Some(card) => self.power.can_afford(&card.card.requirements),
        }
    }

    #[must_use]
    pub fn has_empty_deck(&self) -> bool {
        self.deck.is_empty()
    }

    /// All slots this seat owns, ascending.
    #[must_use]
    pub fn owned_slots(&self) -> Vec<Slot> {
        let mut slots: Vec<_> = self
            .hand
            .slots()
            .chain(self.deck.iter().map(|c| c.slot))
            .chain(self.void.slots())
            .collect();
        slots.sort_unstable();
        slots
    }

    /// `p=power/max(influences), #h=.. #d=.. #v=..`
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "p={}, #h={} #d={} #v={}",
            self.power.summary(),
            self.hand.len(),
            self.deck.len(),
            self.void.len()
        )
    }
}
