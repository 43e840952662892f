//! Player and game state, derived purely by folding events.
//!
//! ## Key Types
//!
//! - `PowerState`: power pool and accumulated influence
//! - `PlayerState`: one seat's zones and resources, with its transition builder
//! - `GameState`: the full snapshot and the `receive` reducer

pub mod power;
pub mod player;
pub mod game;

pub use power::PowerState;
pub use player::{PlayerState, PlayerStateBuilder};
pub use game::GameState;
