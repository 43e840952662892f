//! Reference card content.

use crate::actions::DecisionKind;
use crate::cards::{Card, CardId, CardRegistry, Influence, Influences, PowerSource, Requirements};

pub const JUST_POWER: CardId = CardId::new(0);
pub const JUST_CARD: CardId = CardId::new(1);
pub const SEEK_POWER: CardId = CardId::new(2);

const SIGIL_BASE: u32 = 10;

/// ID of the sigil granting `influence`.
#[must_use]
pub const fn sigil(influence: Influence) -> CardId {
    CardId::new(SIGIL_BASE + influence as u32)
}

/// Registry holding every reference card.
#[must_use]
pub fn reference_cards() -> CardRegistry {
    let mut registry = CardRegistry::new();

    registry.register(
        Card::new(JUST_POWER, "Just Power")
            .with_power(PowerSource::new(Influences::of(Influence::Gray, 1))),
    );
    registry.register(Card::new(JUST_CARD, "Just Card"));
    registry.register(
        Card::new(SEEK_POWER, "Seek Power")
            .with_requirements(Requirements::free().power_cost(1))
            .with_summon([DecisionKind::SeekPower]),
    );
    for influence in Influence::ALL {
        registry.register(
            Card::new(sigil(influence), format!("{} Sigil", influence))
                .with_power(PowerSource::new(Influences::of(influence, 1))),
        );
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_cards() {
        let cards = reference_cards();
        assert_eq!(cards.len(), 9);

        let seek = cards.get(SEEK_POWER).unwrap();
        assert!(seek.is_summon());
        assert_eq!(seek.requirements.power(), 1);

        let fire = cards.get(sigil(Influence::Fire)).unwrap();
        assert_eq!(fire.name, "Fire Sigil");
        assert_eq!(fire.power.unwrap().influences.get(Influence::Fire), 1);
        assert!(cards.get(JUST_POWER).unwrap().is_power());
        assert!(!cards.get(JUST_CARD).unwrap().is_power());
    }

    #[test]
    fn test_sigil_ids_distinct() {
        let mut ids: Vec<_> = Influence::ALL.iter().map(|&i| sigil(i)).collect();
        ids.dedup();
        assert_eq!(ids.len(), 6);
        assert!(!ids.contains(&SEEK_POWER));
    }
}
