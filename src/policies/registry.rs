//! Name-keyed policy factories.

use rustc_hash::FxHashMap;

use crate::core::{EngineError, PlayerId, Result};
use crate::library::SEEK_POWER;
use crate::seats::Policy;

use super::chain::ChainPolicy;
use super::dummy::Dummy;
use super::engines::{DiscardNonPowerFirst, PlayCardOf, PlayPower, PowerCheck, TurnLimiter};

/// Builds a fresh policy for one seat.
pub type PolicyFactory = fn(PlayerId) -> Box<dyn Policy>;

/// Turn at which the reference chain concedes.
pub const TURN_LIMIT: u32 = 10;

/// Registry of policy factories by name.
#[derive(Clone, Default)]
pub struct PolicyRegistry {
    factories: FxHashMap<String, PolicyFactory>,
}

impl PolicyRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `dummy` and `play-power`.
    #[must_use]
    pub fn reference() -> Self {
        let mut registry = Self::new();
        registry.register("dummy", dummy);
        registry.register("play-power", play_power);
        registry
    }

    /// Register a factory.
    ///
    /// # Panics
    ///
    /// Panics if the name is already registered.
    pub fn register(&mut self, name: impl Into<String>, factory: PolicyFactory) {
        let name = name.into();
        if self.factories.contains_key(&name) {
            panic!("Policy '{}' already registered", name);
        }
        self.factories.insert(name, factory);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Build the named policy for `player`.
    pub fn resolve(&self, name: &str, player: PlayerId) -> Result<Box<dyn Policy>> {
        self.factories
            .get(name)
            .map(|factory| factory(player))
            .ok_or_else(|| EngineError::UnknownPolicy(name.to_string()))
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for PolicyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyRegistry")
            .field("names", &self.names())
            .finish()
    }
}

fn dummy(_player: PlayerId) -> Box<dyn Policy> {
    Box::new(Dummy)
}

fn play_power(player: PlayerId) -> Box<dyn Policy> {
    Box::new(
        ChainPolicy::builder(player)
            .mulligan(PowerCheck::at_least(2))
            .engine(TurnLimiter::new(player, TURN_LIMIT))
            .engine(PlayPower::new(player))
            .engine(PlayCardOf::new(player, SEEK_POWER))
            .special(DiscardNonPowerFirst::new(player))
            .build(),
    )
}
