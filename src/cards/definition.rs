//! Card definitions - static card data.
//!
//! A `Card` is immutable truth for the engine: a cost plus two optional
//! capabilities. A *power source* grants power and influence when played
//! instead of charging a cost. A *summon trigger* forces one or more
//! decisions on the controller as the card is played.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::actions::{Decision, DecisionKind};
use crate::core::PlayerId;

use super::influence::{Influences, Requirements};

/// Unique identifier for a card definition.
///
/// This identifies the "type" of card (e.g., "Seek Power"),
/// not a specific copy in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Power-source capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerSource {
    /// Enters play exhausted: raises max power but not current power.
    pub depleted: bool,
    /// Influence granted on play.
    pub influences: Influences,
}

impl PowerSource {
    /// A ready power source granting `influences`.
    #[must_use]
    pub fn new(influences: Influences) -> Self {
        Self {
            depleted: false,
            influences,
        }
    }

    /// Mark as depleted.
    #[must_use]
    pub fn depleted(mut self) -> Self {
        self.depleted = true;
        self
    }
}

/// Summon-trigger capability: decisions forced on the controller.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummonTrigger {
    pub decisions: SmallVec<[DecisionKind; 2]>,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use eternal_sim::cards::{Card, CardId, Influence, Influences, PowerSource, Requirements};
///
/// let sigil = Card::new(CardId::new(10), "Fire Sigil")
///     .with_power(PowerSource::new(Influences::of(Influence::Fire, 1)));
/// assert!(sigil.is_power());
///
/// let bolt = Card::new(CardId::new(11), "Torch")
///     .with_requirements(Requirements::free().power_cost(1).require(Influence::Fire, 1));
/// assert_eq!(bolt.requirements.power(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Human-readable name, used in match narratives.
    pub name: String,

    /// Play cost, charged on every play. Power sources pay it too.
    pub requirements: Requirements,

    pub power: Option<PowerSource>,

    pub summon: Option<SummonTrigger>,
}

impl Card {
    /// Create a free card with no capabilities.
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            requirements: Requirements::free(),
            power: None,
            summon: None,
        }
    }

    /// Set the play cost.
    #[must_use]
    pub fn with_requirements(mut self, requirements: Requirements) -> Self {
        self.requirements = requirements;
        self
    }

    /// Make this card a power source.
    #[must_use]
    pub fn with_power(mut self, power: PowerSource) -> Self {
        self.power = Some(power);
        self
    }

    /// Attach a summon trigger forcing `decisions` on play.
    #[must_use]
    pub fn with_summon(mut self, decisions: impl IntoIterator<Item = DecisionKind>) -> Self {
        self.summon = Some(SummonTrigger {
            decisions: decisions.into_iter().collect(),
        });
        self
    }

    #[must_use]
    pub fn is_power(&self) -> bool {
        self.power.is_some()
    }

    #[must_use]
    pub fn is_summon(&self) -> bool {
        self.summon.is_some()
    }

    /// Decisions the summon trigger forces on `player`, in order.
    ///
    /// Empty for cards without a summon trigger.
    #[must_use]
    pub fn act(&self, player: PlayerId) -> Vec<Decision> {
        self.summon
            .iter()
            .flat_map(|s| s.decisions.iter())
            .map(|kind| kind.bind(player))
            .collect()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Influence;

    #[test]
    fn test_plain_card() {
        let card = Card::new(CardId::new(1), "Filler")
            .with_requirements(Requirements::free().power_cost(2));

        assert!(!card.is_power());
        assert!(!card.is_summon());
        assert_eq!(card.requirements.power(), 2);
        assert!(card.act(PlayerId::new(0)).is_empty());
        assert_eq!(card.to_string(), "Filler");
    }

    #[test]
    fn test_power_source() {
        let card = Card::new(CardId::new(2), "Shadow Sigil")
            .with_power(PowerSource::new(Influences::of(Influence::Shadow, 1)).depleted());

        let power = card.power.unwrap();
        assert!(power.depleted);
        assert_eq!(power.influences.get(Influence::Shadow), 1);
    }

    #[test]
    fn test_summon_binds_controller() {
        let card = Card::new(CardId::new(3), "Seeker")
            .with_summon([DecisionKind::SeekPower, DecisionKind::Discard { count: 1 }]);

        let decisions = card.act(PlayerId::new(1));
        assert_eq!(
            decisions,
            vec![
                Decision::SeekPower { player: PlayerId::new(1) },
                Decision::Discard { player: PlayerId::new(1), count: 1 },
            ]
        );
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(CardId::new(4), "Seeker").with_summon([DecisionKind::SeekPower]);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
