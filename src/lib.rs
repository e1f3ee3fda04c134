//! Relic - APM instrumentation that is safe to call anywhere
//!
//! Relic stands between application code and an optionally-present
//! monitoring agent. Every call is safe to make unconditionally: when the
//! agent is not loaded, operations return a fixed sentinel (`false`, `""`,
//! `None`, or nothing) instead of failing.
//!
//! # Quick Start
//!
//! ```
//! use relic::prelude::*;
//! use relic::Environment;
//!
//! // The process-wide environment; detached unless a host installed one
//! let agent = Agent::with_appname(Environment::global(), "svc-a", None);
//!
//! agent.name_transaction("checkout");
//! let header = agent.browser_timing_header(true);
//! assert!(agent.is_loaded() || header.is_empty());
//! ```
//!
//! # Architecture
//!
//! - [`Agent`] (`relic-agent`): one typed method per operation, grouped into
//!   family traits. The preferred surface.
//! - [`DynamicAgent`] (`relic-dispatch`): camelCase call names resolved
//!   against the agent at call time.
//! - `relic-core`: the [`Capability`] boundary, [`Value`], settings and the
//!   [`Environment`] both facades share.
//!
//! A host binds the real agent by implementing [`Capability`] (or building a
//! [`SymbolTable`]) and installing it with [`Environment::install`].

pub use relic_agent::{
    Agent, AgentConfig, AppName, Browser, CustomAttributes, DatastoreParams, DistributedTracing,
    Errors, Headers, Metrics, Transactions, TransportType, APP_NAME_SEPARATOR, CONFIG_FILE_NAME,
};
pub use relic_core::{
    symbol_name, symbols, testing, version, Attributes, Capability, CapabilityError, ConfigSet,
    ConfigStore, Environment, FacadeError, MemoryConfigStore, NullCapability, Result, Settings,
    SymbolTable, SymbolTableBuilder, Value, SYMBOL_PREFIX, VERSION,
};
pub use relic_dispatch::DynamicAgent;

/// Everything needed to instrument code
pub mod prelude {
    pub use relic_agent::prelude::*;
    pub use relic_dispatch::DynamicAgent;
}
