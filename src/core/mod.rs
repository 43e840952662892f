//! Core engine types: players, RNG, errors, configuration.
//!
//! These are the building blocks every other module leans on. Nothing here
//! knows about cards or zones beyond the identifiers carried in errors.

pub mod player;
pub mod rng;
pub mod error;
pub mod config;

pub use player::{PlayerId, PlayerMap, MAX_SEATS};
pub use rng::GameRng;
pub use error::{EngineError, Result};
pub use config::{Limits, SeatConfig, MatchConfig, BatchConfig};
