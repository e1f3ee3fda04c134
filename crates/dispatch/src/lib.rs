//! Dynamic APM facade
//!
//! [`DynamicAgent`] has no enumerated operations. Callers name an operation
//! in camelCase (`nameTransaction`), and it is resolved against the agent
//! at call time. Prefer `relic_agent::Agent` when the operation set is known;
//! this facade serves open-ended symbol sets and agents newer than this
//! library.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod dynamic;

pub use dynamic::DynamicAgent;
pub use relic_core::symbol_name;
