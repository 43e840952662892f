//! The three-tier intention vocabulary.
//!
//! - `GameAction`: an unvalidated intention, interpreted into events
//! - `Decision`: a sub-choice forced on a seat, with a pure default
//! - `PlayerRequest`: what a seat's policy actually emits

pub mod action;
pub mod request;
pub mod decision;

pub use action::{ActionKind, GameAction};
pub use request::PlayerRequest;
pub use decision::{Decision, DecisionKind};
