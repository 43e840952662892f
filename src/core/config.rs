//! Match configuration types.
//!
//! - `Limits`: guard rails against policies that never stop acting
//! - `SeatConfig`: which policy plays which deck
//! - `MatchConfig`: one seeded match
//! - `BatchConfig`: many independent matches derived from a master seed
//!
//! Names in `SeatConfig` are resolved through a `Catalog`; configuration
//! itself never touches card content.

use serde::{Deserialize, Serialize};

/// Resolution guard rails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Requests accepted from the active seat per action phase.
    /// Hitting the cap ends the phase with a warning.
    pub max_actions_per_turn: usize,

    /// Requests other seats may inject ahead of a single intention.
    /// Hitting the cap aborts the match.
    pub max_reactions_per_window: usize,

    /// Times the hand-limit discards may be re-injected before one turn
    /// advance. Hitting the cap aborts the match.
    pub max_hand_limit_rounds: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_actions_per_turn: 256,
            max_reactions_per_window: 64,
            max_hand_limit_rounds: 8,
        }
    }
}

impl Limits {
    /// Set the per-turn action cap.
    pub fn with_max_actions_per_turn(mut self, n: usize) -> Self {
        self.max_actions_per_turn = n;
        self
    }

    /// Set the per-window reaction cap.
    pub fn with_max_reactions_per_window(mut self, n: usize) -> Self {
        self.max_reactions_per_window = n;
        self
    }

    /// Set the hand-limit round cap.
    pub fn with_max_hand_limit_rounds(mut self, n: usize) -> Self {
        self.max_hand_limit_rounds = n;
        self
    }
}

/// One seat: a policy name and a deck name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    pub policy: String,
    pub deck: String,
}

impl SeatConfig {
    /// Create a seat config.
    pub fn new(policy: impl Into<String>, deck: impl Into<String>) -> Self {
        Self {
            policy: policy.into(),
            deck: deck.into(),
        }
    }
}

/// Configuration for a single match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Seed for turn order and mulligan shuffles.
    pub seed: u64,

    /// Seats in `PlayerId` order.
    pub seats: Vec<SeatConfig>,

    /// Resolution guard rails.
    pub limits: Limits,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            seats: vec![
                SeatConfig::new("play-power", "empty-with-seek"),
                SeatConfig::new("play-power", "empty-with-seek"),
            ],
            limits: Limits::default(),
        }
    }
}

impl MatchConfig {
    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the seat list.
    pub fn with_seats(mut self, seats: Vec<SeatConfig>) -> Self {
        self.seats = seats;
        self
    }

    /// Replace the limits.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }
}

/// Configuration for a batch of independent matches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Number of matches to run.
    pub games: u32,

    /// Master seed. Per-match seeds are drawn from it in order.
    pub seed: u64,

    /// Seats shared by every match.
    pub seats: Vec<SeatConfig>,

    /// Resolution guard rails shared by every match.
    pub limits: Limits,
}

impl Default for BatchConfig {
    fn default() -> Self {
        let single = MatchConfig::default();
        Self {
            games: 100,
            seed: single.seed,
            seats: single.seats,
            limits: single.limits,
        }
    }
}

impl BatchConfig {
    /// Set the number of matches.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Set the master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the seat list.
    pub fn with_seats(mut self, seats: Vec<SeatConfig>) -> Self {
        self.seats = seats;
        self
    }

    /// Replace the limits.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Match configuration for one game of the batch.
    pub fn match_config(&self, seed: u64) -> MatchConfig {
        MatchConfig {
            seed,
            seats: self.seats.clone(),
            limits: self.limits.clone(),
        }
    }
}
