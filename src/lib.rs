//! # eternal-sim
//!
//! A deterministic, event-sourced simulator for two-or-more-seat card game
//! matches.
//!
//! ## Design Principles
//!
//! 1. **Event-Sourced**: A match is a `SetupLog` plus an ordered sequence of
//!    `GameEvent`s. The current `GameState` is always the fold of the
//!    events over the state the setup produced.
//!
//! 2. **Persistent Values**: Every transition returns a new value via
//!    `im-rs`; earlier states stay valid and share structure.
//!
//! 3. **Reproducible**: One `GameRng` seeded at ignition drives turn order
//!    and every mulligan shuffle. Equal inputs give byte-equal event logs.
//!
//! ## Architecture
//!
//! Seats state *intentions* (`GameAction`s). The `Resolver` opens each
//! batch of intentions to reactions from the other seats, then interprets
//! the queue, committing events one at a time. Rulesets (`Rules`) decide
//! mulligans, turn structure, hand limits and the end of the match.
//!
//! ## Example
//!
//! ```
//! use eternal_sim::{Catalog, MatchConfig};
//!
//! let catalog = Catalog::reference();
//! let config = MatchConfig::default().with_seed(11);
//! let log = catalog.engine(&config).unwrap().ignite(config.seed).unwrap();
//!
//! assert!(log.state().end);
//! assert!(log.state().loser.is_some());
//! println!("{}", log.narrative());
//! ```
//!
//! ## Modules
//!
//! - `core`: Players, RNG, errors, configuration
//! - `cards`: Influence, card definitions, decklists
//! - `zones`: Slots, hand, deck, void and zone moves
//! - `state`: Per-seat and whole-match state reducers
//! - `log`: Events, setup record, the committed game log
//! - `actions`: Intentions, seat requests, forced decisions
//! - `rules`: The `Rules` contract and the `Throne` ruleset
//! - `seats`: The `Policy` capability trait and `Seat`
//! - `resolution`: Reaction window and interpretation
//! - `engine`: The match turn loop
//! - `policies`: Reference policies
//! - `library`: Reference cards and decks, the `Catalog`
//! - `batch`: Parallel multi-match runs

pub mod core;
pub mod cards;
pub mod zones;
pub mod state;
pub mod log;
pub mod actions;
pub mod rules;
pub mod seats;
pub mod resolution;
pub mod engine;
pub mod policies;
pub mod library;
pub mod batch;

// Re-export commonly used types
pub use crate::core::{
    BatchConfig, EngineError, GameRng, Limits, MatchConfig,
    PlayerId, PlayerMap, Result, SeatConfig,
};

pub use crate::cards::{
    Card, CardId, CardRegistry, Deck, DeckRegistry, Influence, Influences,
    PowerSource, Requirements, SummonTrigger,
};

pub use crate::zones::{Hand, OrderedCard, OrderedDeck, Slot, Void, Zone, ZoneChange};

pub use crate::state::{GameState, PlayerState, PowerState};

pub use crate::log::{GameEvent, GameLog, InitialDraw, LogProjection, SetupLog};

pub use crate::actions::{ActionKind, Decision, DecisionKind, GameAction, PlayerRequest};

pub use crate::rules::{InitialDrawStrategy, PowerCurve, Rules, Throne, Uniform};

pub use crate::seats::{Policy, Seat};

pub use crate::resolution::Resolver;

pub use crate::engine::MatchEngine;

pub use crate::policies::{ChainPolicy, Dummy, PolicyRegistry};

pub use crate::library::Catalog;

pub use crate::batch::{run_batch, BatchResults, MatchFailure, MatchRecord};
