//! Rulesets the engine defers to.
//!
//! Rulesets implement `Rules` to define:
//! - Mulligan count and opening-hand draw strategy per attempt
//! - Hand-size limit and match-end condition
//! - The intentions that open and close a turn
//!
//! The resolution engine calls into `Rules` but never hardcodes any of
//! these itself. `Throne` is the reference ruleset.

pub mod draw;
pub mod ruleset;
pub mod throne;

pub use draw::{InitialDrawStrategy, PowerCurve, Uniform};
pub use ruleset::Rules;
pub use throne::Throne;
