//! Many independent matches in parallel.
//!
//! ## Key Types
//!
//! - `run_batch`: run a `BatchConfig` on the rayon pool
//! - `BatchResults`: completed `MatchRecord`s and isolated `MatchFailure`s

pub mod runner;

pub use runner::{batch_seeds, run_batch, BatchResults, MatchFailure, MatchRecord};
