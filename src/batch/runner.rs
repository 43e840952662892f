//! Parallel batch runner.
//!
//! Per-match seeds are drawn up front from a master `GameRng`, so a batch
//! is reproducible regardless of thread count. Matches run on the rayon
//! pool; an engine error fails only its own match.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::{BatchConfig, GameRng, PlayerId};
use crate::library::Catalog;
use crate::log::GameLog;

/// A completed match.
#[derive(Clone, Debug)]
pub struct MatchRecord {
    pub index: u32,
    pub seed: u64,
    pub log: GameLog,
}

impl MatchRecord {
    #[must_use]
    pub fn loser(&self) -> Option<PlayerId> {
        self.log.state().loser
    }
}

/// A match whose engine returned an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchFailure {
    pub index: u32,
    pub seed: u64,
    pub message: String,
}

/// Outcome of a batch, both lists sorted by match index.
#[derive(Clone, Debug, Default)]
pub struct BatchResults {
    pub records: Vec<MatchRecord>,
    pub failures: Vec<MatchFailure>,
}

impl BatchResults {
    /// Losses per seat over completed matches.
    #[must_use]
    pub fn losses(&self) -> BTreeMap<PlayerId, u32> {
        let mut losses = BTreeMap::new();
        for loser in self.records.iter().filter_map(MatchRecord::loser) {
            *losses.entry(loser).or_insert(0) += 1;
        }
        losses
    }

    /// Mean number of turns over completed matches.
    #[must_use]
    pub fn mean_turns(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let total: u64 = self.records.iter().map(|r| u64::from(r.log.state().turn)).sum();
        total as f64 / self.records.len() as f64
    }
}

/// Per-match seeds for `config`, in match order.
#[must_use]
pub fn batch_seeds(config: &BatchConfig) -> Vec<u64> {
    let mut master = GameRng::new(config.seed);
    (0..config.games).map(|_| master.next_seed()).collect()
}

/// Run every match of `config` against `catalog`.
pub fn run_batch(config: &BatchConfig, catalog: &Catalog) -> BatchResults {
    info!(games = config.games, seed = config.seed, "starting batch");

    let outcomes: Vec<Result<MatchRecord, MatchFailure>> = batch_seeds(config)
        .into_par_iter()
        .enumerate()
        .map(|(i, seed)| {
            let index = i as u32;
            let match_config = config.match_config(seed);
            catalog
                .engine(&match_config)
                .and_then(|engine| engine.ignite(seed))
                .map(|log| MatchRecord { index, seed, log })
                .map_err(|e| {
                    warn!(index, seed, error = %e, "match failed");
                    MatchFailure {
                        index,
                        seed,
                        message: e.to_string(),
                    }
                })
        })
        .collect();

    let mut results = BatchResults::default();
    for outcome in outcomes {
        match outcome {
            Ok(record) => results.records.push(record),
            Err(failure) => results.failures.push(failure),
        }
    }

    info!(
        completed = results.records.len(),
        failed = results.failures.len(),
        mean_turns = results.mean_turns(),
        "batch complete"
    );
    results
}
