//! Core types for the Relic APM facade
//!
//! This crate defines what every facade shares:
//! - Value: Argument/return currency of the capability boundary
//! - Capability: The optionally-present agent, keyed by symbol name
//! - SymbolTable: Host-bound capability table
//! - Symbols: Agent function names and the camelCase translation
//! - ConfigStore / Settings: Agent settings with additive, idempotent apply
//! - Environment: Capability + store, with a process-wide default
//! - Error: Capability failures and caller contract violations
//! - Testing: Spy capability for facade tests

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod capability;
pub mod config;
pub mod environment;
pub mod error;
pub mod symbols;
pub mod table;
pub mod testing;
pub mod value;

pub use capability::{Capability, NullCapability};
pub use config::{ConfigSet, ConfigStore, MemoryConfigStore, Settings};
pub use environment::Environment;
pub use error::{CapabilityError, FacadeError, Result};
pub use symbols::{symbol_name, SYMBOL_PREFIX};
pub use table::{SymbolFn, SymbolTable, SymbolTableBuilder};
pub use value::{Attributes, Value};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library version, as a function for callers that want one
pub fn version() -> &'static str {
    VERSION
}
