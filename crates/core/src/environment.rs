//! Runtime environment handed to facades
//!
//! An [`Environment`] bundles the two external collaborators a facade talks
//! to: the [`Capability`] (the agent, possibly absent) and the
//! [`ConfigStore`] holding its settings. Facades are constructed from an
//! explicit environment; the process-wide slot exists only for callers that
//! need a shared default.
//!
//! ## Process-wide Environment
//!
//! [`Environment::install`] fills the slot once, typically at startup after
//! the host has bound the agent. [`Environment::global`] returns the
//! installed environment, or installs a detached one on first use. The
//! slot is never reset; the first initializer wins.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::capability::{Capability, NullCapability};
use crate::config::{ConfigStore, MemoryConfigStore};

static GLOBAL_ENVIRONMENT: OnceCell<Environment> = OnceCell::new();

/// Capability plus configuration store
#[derive(Clone)]
pub struct Environment {
    capability: Arc<dyn Capability>,
    store: Arc<dyn ConfigStore>,
}

impl Environment {
    /// Create an environment from its collaborators
    pub fn new(capability: Arc<dyn Capability>, store: Arc<dyn ConfigStore>) -> Self {
        Environment { capability, store }
    }

    /// Environment with a capability and a fresh in-memory store
    pub fn with_capability(capability: Arc<dyn Capability>) -> Self {
        Self::new(capability, Arc::new(MemoryConfigStore::new()))
    }

    /// Environment with no agent
    pub fn detached() -> Self {
        Self::with_capability(Arc::new(NullCapability))
    }

    /// The agent
    pub fn capability(&self) -> &Arc<dyn Capability> {
        &self.capability
    }

    /// The configuration store
    pub fn store(&self) -> &Arc<dyn ConfigStore> {
        &self.store
    }

    /// Install `env` as the process-wide environment
    ///
    /// Returns `false` (and drops `env`) if one is already installed.
    pub fn install(env: Environment) -> bool {
        GLOBAL_ENVIRONMENT.set(env).is_ok()
    }

    /// The process-wide environment, detached unless one was installed
    pub fn global() -> &'static Environment {
        GLOBAL_ENVIRONMENT.get_or_init(Environment::detached)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::detached()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment").finish_non_exhaustive()
    }
}
