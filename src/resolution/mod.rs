//! Resolution engine: phase orchestration and action interpretation.
//!
//! Both responsibilities live in one component, `Resolver`, with one entry
//! point that recurses internally. See [`resolver`] for the protocol.

pub mod resolver;

pub use resolver::Resolver;
