//! Match engine: mulligan setup and the start/action/end turn loop.

pub mod match_engine;

pub use match_engine::MatchEngine;
