//! Per-seat power pool.

use serde::{Deserialize, Serialize};

use crate::cards::{Influences, Requirements};

/// Current power, max power and accumulated influence.
///
/// `power <= max_power` after every replenish; spending can only lower it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerState {
    pub power: u32,
    pub max_power: u32,
    pub influences: Influences,
}

impl PowerState {
    /// Enough power in the pool and every color covered.
    #[must_use]
    pub fn can_afford(&self, requirements: &Requirements) -> bool {
        self.power >= requirements.power() && self.influences.covers(&requirements.influences())
    }

    /// Accumulate colored influence.
    #[must_use]
    pub fn add(&self, influences: &Influences) -> Self {
        Self {
            influences: self.influences.add(influences),
            ..*self
        }
    }

    /// Spend the power part of a cost. Influence is never spent.
    #[must_use]
    pub fn expense(&self, requirements: &Requirements) -> Self {
        Self {
            power: self.power.saturating_sub(requirements.power()),
            ..*self
        }
    }

    /// Refill the pool to max.
    #[must_use]
    pub fn replenish(&self) -> Self {
        Self {
            power: self.max_power,
            ..*self
        }
    }

    #[must_use]
    pub fn increment_max(&self) -> Self {
        Self {
            max_power: self.max_power + 1,
            ..*self
        }
    }

    #[must_use]
    pub fn increment_power_if(&self, condition: bool) -> Self {
        if condition {
            Self {
                power: self.power + 1,
                ..*self
            }
        } else {
            *self
        }
    }

    /// `power/max(influences)`, e.g. `2/3(F=1)`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{}/{}({})", self.power, self.max_power, self.influences.summary())
    }
}
