//! Availability-gated APM facade
//!
//! [`Agent`] exposes one typed method per monitoring operation, grouped
//! into family traits. Every method is safe to call unconditionally: when
//! the agent is not loaded it returns a fixed sentinel without touching the
//! environment.
//!
//! ## Module Structure
//!
//! - `agent`: The facade, its probe-once state and settings
//! - `app_name`: One or more application names
//! - `config`: `relic.toml` configuration
//! - `transactions`: Naming and lifecycle of the current transaction
//! - `attributes`: Custom parameters, user attributes, events, tracers
//! - `metrics`: Custom metrics and datastore segments
//! - `browser`: Front-end timing snippets
//! - `errors`: Error reporting
//! - `distributed`: Trace header propagation
//!
//! ## Example
//!
//! ```
//! use relic_agent::prelude::*;
//! use relic_core::Environment;
//!
//! let agent = Agent::with_appname(&Environment::detached(), ["svc-a", "svc-b"], None);
//! agent.name_transaction("checkout");
//! agent.custom_metric("Custom/cart_size", 3.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod agent;
pub mod app_name;
pub mod attributes;
pub mod browser;
pub mod config;
pub mod distributed;
pub mod errors;
pub mod metrics;
pub mod transactions;

pub use agent::Agent;
pub use app_name::{AppName, APP_NAME_SEPARATOR};
pub use attributes::CustomAttributes;
pub use browser::Browser;
pub use config::{AgentConfig, CONFIG_FILE_NAME};
pub use distributed::{DistributedTracing, Headers, TransportType};
pub use errors::Errors;
pub use metrics::{DatastoreParams, Metrics};
pub use transactions::Transactions;

/// The facade and every family trait
pub mod prelude {
    pub use crate::{
        Agent, AgentConfig, AppName, Browser, CustomAttributes, DatastoreParams,
        DistributedTracing, Errors, Metrics, Transactions, TransportType,
    };
}
