//! The availability-gated facade
//!
//! [`Agent`] probes the environment's capability exactly once, at
//! construction, and caches the answer. Every operation consults that flag
//! before doing anything:
//!
//! - agent absent: return the operation's sentinel immediately, with no
//!   external call and no config-store read
//! - agent present: build the arguments, delegate, and hand back the
//!   agent's result
//!
//! A failure reported by a loaded agent is folded into the same sentinel
//! and logged as a warning. Nothing here ever returns an error for an
//! absent agent.
//!
//! ## Sentinels
//!
//! | Return type | Sentinel |
//! |-------------|----------|
//! | `bool` | `false` |
//! | `String` | `""` |
//! | `()` | call skipped |
//! | `Option<T>` | `None` |

use parking_lot::Mutex;
use relic_core::symbols::{CONFIG_NAMESPACE, LICENSE_KEY};
use relic_core::{CapabilityError, ConfigSet, Environment, Result, Settings, Value};
use tracing::{debug, warn};

use crate::app_name::AppName;
use crate::config::AgentConfig;
use crate::transactions::Transactions;

/// Availability-gated APM facade
///
/// Cheap to share behind an `Arc`; all operations take `&self`.
///
/// # Example
///
/// ```
/// use relic_agent::prelude::*;
/// use relic_core::Environment;
///
/// // No agent in this process: every call degrades
/// let agent = Agent::new(&Environment::detached());
/// assert!(!agent.is_loaded());
/// assert!(!agent.name_transaction("checkout"));
/// assert_eq!(agent.browser_timing_header(true), "");
/// ```
pub struct Agent {
    env: Environment,

    /// Computed once at construction, never re-evaluated
    loaded: bool,

    settings: Mutex<Settings>,
}

impl Agent {
    /// Create a facade with no application name
    pub fn new(env: &Environment) -> Self {
        Agent {
            env: env.clone(),
            loaded: env.capability().is_loaded(),
            settings: Mutex::new(Settings::new()),
        }
    }

    /// Create a facade and immediately set the application name(s)
    pub fn with_appname(env: &Environment, name: impl Into<AppName>, license: Option<&str>) -> Self {
        let agent = Agent::new(env);
        let name = name.into();
        if !name.is_empty() {
            agent.set_appname(name, license, false);
        }
        agent
    }

    /// Create a facade from a configuration
    ///
    /// Settings are merged and applied first, so a license supplied through
    /// them is visible to the application-name call that follows.
    ///
    /// # Errors
    ///
    /// Returns an error if a setting key is invalid or the store rejects a
    /// write. An absent agent is not an error.
    pub fn with_config(env: &Environment, config: AgentConfig) -> Result<Self> {
        let agent = Agent::new(env);
        agent.configure(config.settings)?;

        if let Some(name) = config.appname.filter(|n| !n.is_empty()) {
            agent.set_appname(name, config.license.as_deref(), false);
        }
        Ok(agent)
    }

    /// Whether the agent was present when this facade was built
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The environment this facade delegates to
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Merge `set` into the retained settings and apply them to the store
    ///
    /// Keys already retained keep their first value. The store is written
    /// only for keys whose value differs, and only when the agent is
    /// loaded; returns the number of keys written.
    pub fn configure(&self, set: ConfigSet) -> Result<usize> {
        let mut settings = self.settings.lock();
        settings.merge(set)?;
        if !self.loaded {
            return Ok(0);
        }
        settings.apply(self.env.store().as_ref())
    }

    /// The retained settings
    pub fn settings(&self) -> ConfigSet {
        self.settings.lock().retained().clone()
    }

    /// Every live store value under `namespace` (empty when absent)
    pub fn live_settings(&self, namespace: &str) -> ConfigSet {
        if !self.loaded {
            return ConfigSet::new();
        }
        self.env.store().get_all(namespace)
    }

    /// Live store values under the agent's own namespace
    pub fn agent_settings(&self) -> ConfigSet {
        self.live_settings(CONFIG_NAMESPACE)
    }

    // =========================================================================
    // Delegation helpers
    // =========================================================================

    /// Delegate `symbol` if loaded; `args` is only built when it is
    pub(crate) fn invoke(&self, symbol: &'static str, args: impl FnOnce() -> Vec<Value>) -> Option<Value> {
        if !self.loaded {
            return None;
        }
        match self.env.capability().call(symbol, &args()) {
            Ok(value) => Some(value),
            // older agent builds lack some symbols; not a failure
            Err(CapabilityError::UnknownSymbol { .. }) => {
                debug!(target: "relic::agent", symbol, "Agent build lacks symbol");
                None
            }
            Err(err) => {
                warn!(target: "relic::agent", symbol, error = %err, "Agent call failed");
                None
            }
        }
    }

    pub(crate) fn invoke_bool(&self, symbol: &'static str, args: impl FnOnce() -> Vec<Value>) -> bool {
        self.invoke(symbol, args).is_some_and(|v| v.is_truthy())
    }

    pub(crate) fn invoke_string(&self, symbol: &'static str, args: impl FnOnce() -> Vec<Value>) -> String {
        self.invoke(symbol, args)
            .and_then(Value::into_string)
            .unwrap_or_default()
    }

    pub(crate) fn invoke_void(&self, symbol: &'static str, args: impl FnOnce() -> Vec<Value>) {
        let _ = self.invoke(symbol, args);
    }

    /// Explicit license, else the store's default license
    ///
    /// Only called on the loaded path.
    pub(crate) fn license_or_default(&self, license: Option<&str>) -> Option<String> {
        license
            .map(str::to_owned)
            .or_else(|| self.env.store().get(LICENSE_KEY))
    }
}

impl Default for Agent {
    /// A facade over the process-wide environment
    fn default() -> Self {
        Agent::new(Environment::global())
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("loaded", &self.loaded)
            .field("settings", &self.settings.lock().len())
            .finish()
    }
}
