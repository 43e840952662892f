//! Influence colors and cost requirements.
//!
//! There are five colors plus `Gray`, a colorless pseudo-color standing
//! for raw power. Costs are expressed as `Requirements`: the gray amount is
//! paid from the power pool, the colored amounts must be covered by the
//! influence a seat has accumulated (they are never spent).

use serde::{Deserialize, Serialize};

/// Influence color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Influence {
    Fire,
    Time,
    Justice,
    Shadow,
    Primal,
    /// Colorless power.
    Gray,
}

impl Influence {
    /// Every influence, colors first.
    pub const ALL: [Influence; 6] = [
        Influence::Fire,
        Influence::Time,
        Influence::Justice,
        Influence::Shadow,
        Influence::Primal,
        Influence::Gray,
    ];

    /// The five real colors.
    pub const COLORS: [Influence; 5] = [
        Influence::Fire,
        Influence::Time,
        Influence::Justice,
        Influence::Shadow,
        Influence::Primal,
    ];

    /// One-letter symbol used in summaries.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Influence::Fire => 'F',
            Influence::Time => 'T',
            Influence::Justice => 'J',
            Influence::Shadow => 'S',
            Influence::Primal => 'P',
            Influence::Gray => 'G',
        }
    }

    /// Whether this is one of the five colors.
    #[must_use]
    pub const fn is_color(self) -> bool {
        !matches!(self, Influence::Gray)
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Influence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Amount per influence, zero by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Influences([u32; 6]);

impl Influences {
    /// No influence at all.
    #[must_use]
    pub const fn none() -> Self {
        Self([0; 6])
    }

    /// A single influence of `amount`.
    #[must_use]
    pub fn of(influence: Influence, amount: u32) -> Self {
        Self::none().with(influence, amount)
    }

    /// Amount held for `influence`.
    #[must_use]
    pub fn get(&self, influence: Influence) -> u32 {
        self.0[influence.slot()]
    }

    /// Copy with `influence` set to `amount`.
    #[must_use]
    pub fn with(mut self, influence: Influence, amount: u32) -> Self {
        self.0[influence.slot()] = amount;
        self
    }

    /// Sum the colored amounts of `other` into a copy of `self`.
    ///
    /// Gray is not accumulated: raw power lives in the power pool, not in
    /// the influence tally.
    #[must_use]
    pub fn add(&self, other: &Influences) -> Self {
        let mut sum = *self;
        for color in Influence::COLORS {
            sum.0[color.slot()] += other.get(color);
        }
        sum
    }

    /// Whether every color in `required` is met. Gray is ignored.
    #[must_use]
    pub fn covers(&self, required: &Influences) -> bool {
        Influence::COLORS
            .iter()
            .all(|&color| self.get(color) >= required.get(color))
    }

    /// Non-zero entries in `ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Influence, u32)> + '_ {
        Influence::ALL
            .iter()
            .map(move |&i| (i, self.get(i)))
            .filter(|&(_, n)| n > 0)
    }

    /// Compact rendering such as `F=1, T=2`.
    #[must_use]
    pub fn summary(&self) -> String {
        self.iter()
            .map(|(i, n)| format!("{}={}", i.symbol(), n))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Play cost of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Requirements(Influences);

impl Requirements {
    /// A free card.
    #[must_use]
    pub const fn free() -> Self {
        Self(Influences::none())
    }

    /// Set the power (gray) cost.
    #[must_use]
    pub fn power_cost(self, n: u32) -> Self {
        self.require(Influence::Gray, n)
    }

    /// Set the requirement for a single influence.
    #[must_use]
    pub fn require(self, influence: Influence, n: u32) -> Self {
        Self(self.0.with(influence, n))
    }

    /// Power drawn from the pool when the card is played.
    #[must_use]
    pub fn power(&self) -> u32 {
        self.0.get(Influence::Gray)
    }

    /// Colored influence that must be held to play the card.
    #[must_use]
    pub fn influences(&self) -> Influences {
        self.0.with(Influence::Gray, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_ignores_gray() {
        let held = Influences::of(Influence::Fire, 1);
        let grant = Influences::of(Influence::Gray, 1).with(Influence::Fire, 2);

        let sum = held.add(&grant);
        assert_eq!(sum.get(Influence::Fire), 3);
        assert_eq!(sum.get(Influence::Gray), 0);
    }

    #[test]
    fn test_covers() {
        let held = Influences::of(Influence::Time, 2).with(Influence::Shadow, 1);

        assert!(held.covers(&Influences::of(Influence::Time, 2)));
        assert!(!held.covers(&Influences::of(Influence::Time, 3)));
        assert!(!held.covers(&Influences::of(Influence::Primal, 1)));
        // Gray never blocks
        assert!(held.covers(&Influences::of(Influence::Gray, 10)));
    }

    #[test]
    fn test_summary() {
        let influences = Influences::of(Influence::Justice, 2).with(Influence::Fire, 1);
        assert_eq!(influences.summary(), "F=1, J=2");
        assert_eq!(Influences::none().summary(), "");
    }

    #[test]
    fn test_requirements_split() {
        let req = Requirements::free()
            .power_cost(3)
            .require(Influence::Primal, 1);

        assert_eq!(req.power(), 3);
        assert_eq!(req.influences().get(Influence::Primal), 1);
        assert_eq!(req.influences().get(Influence::Gray), 0);
    }

    #[test]
    fn test_influence_serialization() {
        let influences = Influences::of(Influence::Shadow, 4);
        let json = serde_json::to_string(&influences).unwrap();
        let deserialized: Influences = serde_json::from_str(&json).unwrap();
        assert_eq!(influences, deserialized);
    }
}
