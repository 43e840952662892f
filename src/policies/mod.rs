//! Reference seat policies.
//!
//! ## Key Types
//!
//! - `Dummy`: mulligans every hand and never acts
//! - `ChainPolicy`: ordered action engines plus special decision engines
//! - `PolicyRegistry`: policy factories by name

pub mod chain;
pub mod dummy;
pub mod engines;
pub mod registry;

pub use chain::{ActionEngine, ChainPolicy, ChainPolicyBuilder, KeepAll, MulliganCheck, SpecialEngine};
pub use dummy::Dummy;
pub use engines::{DiscardNonPowerFirst, PlayCardOf, PlayPower, PowerCheck, TurnLimiter};
pub use registry::{PolicyFactory, PolicyRegistry, TURN_LIMIT};
