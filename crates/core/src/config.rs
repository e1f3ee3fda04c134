//! Agent configuration store and settings application
//!
//! The agent reads its settings (license, framework, transaction tracer
//! thresholds, ...) from a process-scoped key/value store. Facades retain
//! the settings a caller supplied in a [`Settings`] set and push them into
//! the [`ConfigStore`] with write-if-changed semantics.
//!
//! ## Merge Rules
//!
//! - Merging is additive: a key already retained is never overridden
//! - Applying is idempotent: a key is written only when the store's value
//!   differs from the retained one
//! - Nothing is ever removed from the store
//!
//! ```text
//! merge {a: 1}         -> retained {a: 1}
//! merge {a: 2, b: 3}   -> retained {a: 1, b: 3}
//! ```

use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::{FacadeError, Result};

/// Key/value configuration set, ordered by key
///
/// Caller insertion order is not kept: iteration, and therefore the order
/// [`Settings::apply`] writes to the store, is lexicographic by key.
pub type ConfigSet = BTreeMap<String, String>;

/// Process-scoped key/value store the agent reads its settings from
pub trait ConfigStore: Send + Sync {
    /// Current value of `key`, if set
    fn get(&self, key: &str) -> Option<String>;

    /// Every key under `namespace` (keys prefixed with `"{namespace}."`)
    fn get_all(&self, namespace: &str) -> ConfigSet;

    /// Write `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory [`ConfigStore`]
///
/// Uses `parking_lot::RwLock` so a panicking writer never poisons readers.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    entries: RwLock<ConfigSet>,
}

impl MemoryConfigStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        MemoryConfigStore {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Copy of every entry
    pub fn snapshot(&self) -> ConfigSet {
        self.entries.read().clone()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn get_all(&self, namespace: &str) -> ConfigSet {
        let prefix = format!("{namespace}.");
        self.entries
            .read()
            .iter()
            .filter(|(k, _)| k.starts_with(&prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Settings retained by a facade
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    retained: ConfigSet,
}

impl Settings {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `incoming` into the retained set; existing keys win
    ///
    /// Every incoming key is validated before anything is merged, so a bad
    /// key leaves the retained set untouched.
    ///
    /// # Errors
    ///
    /// Returns [`FacadeError::InvalidSetting`] for an empty key or a key
    /// containing whitespace.
    pub fn merge<K, V>(&mut self, incoming: impl IntoIterator<Item = (K, V)>) -> Result<()>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let incoming: Vec<(String, String)> = incoming
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        for (key, _) in &incoming {
            validate_key(key)?;
        }

        for (key, value) in incoming {
            self.retained.entry(key).or_insert(value);
        }
        Ok(())
    }

    /// Write every retained key whose store value differs, in key order
    ///
    /// Returns the number of keys written.
    pub fn apply(&self, store: &dyn ConfigStore) -> Result<usize> {
        let mut written = 0;
        for (key, value) in &self.retained {
            if store.get(key).as_deref() == Some(value.as_str()) {
                continue;
            }
            store.set(key, value)?;
            debug!(target: "relic::config", key = %key, "Applied setting");
            written += 1;
        }
        Ok(written)
    }

    /// Retained value of `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.retained.get(key).map(String::as_str)
    }

    /// The retained set
    pub fn retained(&self) -> &ConfigSet {
        &self.retained
    }

    /// Number of retained keys
    pub fn len(&self) -> usize {
        self.retained.len()
    }

    /// Whether nothing is retained
    pub fn is_empty(&self) -> bool {
        self.retained.is_empty()
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(FacadeError::invalid_setting(key, "key must not be empty"));
    }
    if key.chars().any(char::is_whitespace) {
        return Err(FacadeError::invalid_setting(key, "key must not contain whitespace"));
    }
    Ok(())
}
