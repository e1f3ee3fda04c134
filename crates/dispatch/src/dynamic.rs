//! DynamicAgent - call-time symbol resolution
//!
//! Each call names an agent operation in camelCase. The name is translated
//! with [`symbol_name`], checked against the agent, and invoked when it
//! exists:
//!
//! ```text
//! call("nameTransaction", args)
//!     -> loaded?                         no  -> false
//!     -> "newrelic_name_transaction"
//!     -> function_exists?                no  -> false
//!     -> call(symbol, args)              err -> false (warned)
//!     -> result
//! ```
//!
//! An absent agent and a missing symbol both answer `false`. Use
//! [`DynamicAgent::supports`] to tell them apart.

use once_cell::sync::OnceCell;
use relic_core::{symbol_name, Environment, Value};
use tracing::{debug, warn};

static INSTANCE: OnceCell<DynamicAgent> = OnceCell::new();

/// Facade resolving camelCase call names against the agent
///
/// # Example
///
/// ```
/// use relic_core::{Environment, Value};
/// use relic_dispatch::DynamicAgent;
///
/// let agent = DynamicAgent::new(&Environment::detached());
/// assert_eq!(agent.call("nameTransaction", &[Value::from("checkout")]), Value::Bool(false));
/// ```
#[derive(Debug, Clone)]
pub struct DynamicAgent {
    env: Environment,
    loaded: bool,
}

impl DynamicAgent {
    /// Create a facade over `env`, probing the agent once
    pub fn new(env: &Environment) -> Self {
        DynamicAgent {
            env: env.clone(),
            loaded: env.capability().is_loaded(),
        }
    }

    /// Create a facade and set the application name when the agent is loaded
    pub fn with_appname(env: &Environment, name: &str) -> Self {
        let agent = DynamicAgent::new(env);
        if agent.loaded && !name.is_empty() {
            agent.call("setAppname", &[Value::from(name)]);
        }
        agent
    }

    /// The process-wide instance, built from [`Environment::global`] on
    /// first access
    pub fn instance() -> &'static DynamicAgent {
        INSTANCE.get_or_init(|| {
            let agent = DynamicAgent::new(Environment::global());
            debug!(target: "relic::dispatch", loaded = agent.loaded, "Created shared DynamicAgent");
            agent
        })
    }

    /// `call` on the process-wide instance
    pub fn call_static(name: &str, args: &[Value]) -> Value {
        Self::instance().call(name, args)
    }

    /// Whether the agent was present when this facade was built
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Invoke the agent operation named `name` in camelCase
    ///
    /// Returns the agent's answer unchanged, or `Value::Bool(false)` when the
    /// agent is absent, lacks the symbol, or reports a failure.
    pub fn call(&self, name: &str, args: &[Value]) -> Value {
        if !self.loaded {
            return Value::FALSE;
        }

        let symbol = symbol_name(name);
        let capability = self.env.capability();
        if !capability.function_exists(&symbol) {
            return Value::FALSE;
        }

        match capability.call(&symbol, args) {
            Ok(value) => value,
            Err(err) => {
                warn!(target: "relic::dispatch", call = name, %symbol, error = %err, "Agent call failed");
                Value::FALSE
            }
        }
    }

    /// Whether the loaded agent exposes the operation named `name`
    ///
    /// Always `false` when the agent is absent.
    pub fn supports(&self, name: &str) -> bool {
        self.loaded && self.env.capability().function_exists(&symbol_name(name))
    }
}

impl Default for DynamicAgent {
    fn default() -> Self {
        DynamicAgent::new(Environment::global())
    }
}
