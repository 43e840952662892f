//! Mulligan-phase record.

use std::collections::BTreeMap;

use crate::core::PlayerId;
use crate::zones::{Hand, OrderedDeck, Slot};

/// One mulligan attempt: the starting hand and the deck left behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitialDraw {
    pub hand: Hand,
    pub deck: OrderedDeck,
}

/// Built once before the first turn and never changed afterwards.
///
/// Every attempt each seat took is kept; the last one is live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupLog {
    /// Turn order, a permutation of all seats.
    pub order: Vec<PlayerId>,
    /// Attempts per seat, in the order they were drawn.
    pub draws: BTreeMap<PlayerId, Vec<InitialDraw>>,
    /// Every turn draws twice.
    pub night: bool,
    /// Seed the match was ignited with.
    pub seed: u64,
}

impl SetupLog {
    /// The draw a seat kept.
    #[must_use]
    pub fn live_draw(&self, player: PlayerId) -> Option<&InitialDraw> {
        self.draws.get(&player).and_then(|d| d.last())
    }

    /// Seats after `current` in turn order, wrapping around, `current` last.
    ///
    /// ```
    /// use eternal_sim::core::PlayerId;
    /// use eternal_sim::log::SetupLog;
    ///
    /// let setup = SetupLog {
    ///     order: vec![PlayerId::new(2), PlayerId::new(0), PlayerId::new(1)],
    ///     draws: Default::default(),
    ///     night: false,
    ///     seed: 0,
    /// };
    /// assert_eq!(
    ///     setup.order_after(PlayerId::new(0)),
    ///     vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(0)]
    /// );
    /// ```
    #[must_use]
    pub fn order_after(&self, current: PlayerId) -> Vec<PlayerId> {
        match self.order.iter().position(|&p| p == current) {
            Some(index) => self.order[index + 1..]
                .iter()
                .chain(self.order[..=index].iter())
                .copied()
                .collect(),
            None => self.order.clone(),
        }
    }

    /// Name of the card a seat owns at `slot`.
    #[must_use]
    pub fn card_name(&self, player: PlayerId, slot: Slot) -> Option<&str> {
        let draw = self.live_draw(player)?;
        draw.deck
            .get(slot)
            .or_else(|| draw.hand.get(slot))
            .map(|c| c.card.name.as_str())
    }

    /// `order [..] (seat: attempts, ..)`
    #[must_use]
    pub fn summary(&self) -> String {
        let order = self
            .order
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let attempts = self
            .draws
            .iter()
            .map(|(p, d)| format!("{}: {}", p, d.len()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("order [{}] ({})", order, attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId};
    use crate::zones::OrderedCard;
    use std::sync::Arc;

    fn setup() -> SetupLog {
        let a = Arc::new(Card::new(CardId::new(0), "Alpha"));
        let b = Arc::new(Card::new(CardId::new(1), "Beta"));
        let first = InitialDraw {
            hand: vec![OrderedCard::new(Slot::new(0), b.clone())].into_iter().collect(),
            deck: OrderedDeck::new(vec![OrderedCard::new(Slot::new(1), a.clone())]),
        };
        let kept = InitialDraw {
            hand: vec![OrderedCard::new(Slot::new(1), a)].into_iter().collect(),
            deck: OrderedDeck::new(vec![OrderedCard::new(Slot::new(0), b)]),
        };
        let mut draws = BTreeMap::new();
        draws.insert(PlayerId::new(0), vec![first, kept]);
        draws.insert(PlayerId::new(1), vec![]);
        SetupLog {
            order: vec![PlayerId::new(1), PlayerId::new(0)],
            draws,
            night: false,
            seed: 1,
        }
    }

    #[test]
    fn test_order_after_last_seat() {
        let s = setup();
        assert_eq!(s.order_after(PlayerId::new(0)), vec![PlayerId::new(1), PlayerId::new(0)]);
        assert_eq!(s.order_after(PlayerId::new(1)), vec![PlayerId::new(0), PlayerId::new(1)]);
    }

    #[test]
    fn test_card_name_uses_live_draw() {
        let s = setup();
        assert_eq!(s.card_name(PlayerId::new(0), Slot::new(1)), Some("Alpha"));
        assert_eq!(s.card_name(PlayerId::new(0), Slot::new(0)), Some("Beta"));
        assert_eq!(s.card_name(PlayerId::new(0), Slot::new(5)), None);
        assert_eq!(s.card_name(PlayerId::new(1), Slot::new(0)), None);
    }

    #[test]
    fn test_summary() {
        assert_eq!(setup().summary(), "order [Player 1, Player 0] (Player 0: 2, Player 1: 0)");
    }
}
