//! Event log: committed facts, the mulligan record, and the log that ties them.
//!
//! ## Key Types
//!
//! - `GameEvent`: the sealed vocabulary of committed facts
//! - `InitialDraw` / `SetupLog`: the mulligan phase, fixed before turn one
//! - `GameLog`: setup + events + the state they fold to
//! - `LogProjection`: the read-only view a policy decides from

pub mod event;
pub mod setup;
pub mod game_log;

pub use event::GameEvent;
pub use setup::{InitialDraw, SetupLog};
pub use game_log::{GameLog, LogProjection, Replay};
