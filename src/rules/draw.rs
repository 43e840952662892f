//! Opening-hand draw strategies.

use crate::core::GameRng;
use crate::log::InitialDraw;
use crate::zones::{Hand, OrderedCard, OrderedDeck};

/// Splits a seat's bound deck into an opening hand and the deck left over.
pub trait InitialDrawStrategy {
    /// `cards` is the deck in slot order; the result must hold every card
    /// exactly once.
    fn extract(&self, cards: &[OrderedCard], rng: &mut GameRng) -> InitialDraw;
}

/// Shuffle everything and take the top `hand_size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Uniform {
    pub hand_size: usize,
}

impl Uniform {
    #[must_use]
    pub fn new(hand_size: usize) -> Self {
        Self { hand_size }
    }
}

impl InitialDrawStrategy for Uniform {
    fn extract(&self, cards: &[OrderedCard], rng: &mut GameRng) -> InitialDraw {
        let mut shuffled = cards.to_vec();
        rng.shuffle(&mut shuffled);
        let rest = shuffled.split_off(self.hand_size.min(shuffled.len()));
        InitialDraw {
            hand: shuffled.into_iter().collect(),
            deck: OrderedDeck::new(rest),
        }
    }
}

/// Guarantee a power count in `min_powers..=max_powers`, chosen uniformly.
///
/// The hand is topped up with non-power cards; the leftovers of both are
/// reshuffled into the deck. A deck short of either kind yields a smaller
/// hand rather than breaking the split.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerCurve {
    pub hand_size: usize,
    pub min_powers: usize,
    pub max_powers: usize,
}

impl PowerCurve {
    /// Two to four powers.
    #[must_use]
    pub fn new(hand_size: usize) -> Self {
        Self {
            hand_size,
            min_powers: 2,
            max_powers: 4,
        }
    }
}

impl InitialDrawStrategy for PowerCurve {
    fn extract(&self, cards: &[OrderedCard], rng: &mut GameRng) -> InitialDraw {
        let num_powers = rng.gen_range_usize(self.min_powers..self.max_powers + 1);
        let num_others = self.hand_size.saturating_sub(num_powers);

        let mut shuffled = cards.to_vec();
        rng.shuffle(&mut shuffled);
        let (mut powers, mut others): (Vec<_>, Vec<_>) =
            shuffled.into_iter().partition(OrderedCard::is_power);

        let spare_powers = powers.split_off(num_powers.min(powers.len()));
        let spare_others = others.split_off(num_others.min(others.len()));

        let hand: Hand = powers.into_iter().chain(others).collect();
        let mut rest: Vec<_> = spare_powers.into_iter().chain(spare_others).collect();
        rng.shuffle(&mut rest);

        InitialDraw {
            hand,
            deck: OrderedDeck::new(rest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId, Influence, Influences, PowerSource};
    use crate::zones::Slot;
    use std::sync::Arc;

    fn cards(powers: u32, others: u32) -> Vec<OrderedCard> {
        let sigil = Arc::new(
            Card::new(CardId::new(1), "Sigil")
                .with_power(PowerSource::new(Influences::of(Influence::Gray, 1))),
        );
        let filler = Arc::new(Card::new(CardId::new(0), "Filler"));
        (0..powers + others)
            .map(|i| {
                let card = if i < powers { sigil.clone() } else { filler.clone() };
                OrderedCard::new(Slot::new(i), card)
            })
            .collect()
    }

    fn conserved(draw: &InitialDraw, total: u32) -> bool {
        let mut slots: Vec<_> = draw
            .hand
            .slots()
            .chain(draw.deck.iter().map(|c| c.slot))
            .map(Slot::raw)
            .collect();
        slots.sort_unstable();
        slots == (0..total).collect::<Vec<_>>()
    }

    #[test]
    fn test_uniform_split() {
        let mut rng = GameRng::new(1);
        let draw = Uniform::new(7).extract(&cards(25, 50), &mut rng);

        assert_eq!(draw.hand.len(), 7);
        assert_eq!(draw.deck.len(), 68);
        assert!(conserved(&draw, 75));
    }

    #[test]
    fn test_uniform_deterministic() {
        let deck = cards(25, 50);
        let a = Uniform::new(7).extract(&deck, &mut GameRng::new(9));
        let b = Uniform::new(7).extract(&deck, &mut GameRng::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_power_curve_bounds() {
        let deck = cards(25, 50);
        for seed in 0..50 {
            let draw = PowerCurve::new(6).extract(&deck, &mut GameRng::new(seed));
            let powers = draw.hand.powers().count();

            assert_eq!(draw.hand.len(), 6);
            assert!((2..=4).contains(&powers), "seed {} gave {} powers", seed, powers);
            assert!(conserved(&draw, 75));
        }
    }

    #[test]
    fn test_power_curve_short_deck() {
        let deck = cards(1, 2);
        let draw = PowerCurve::new(7).extract(&deck, &mut GameRng::new(3));

        assert_eq!(draw.hand.len(), 3);
        assert!(draw.deck.is_empty());
        assert!(conserved(&draw, 3));
    }
}
