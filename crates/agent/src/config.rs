//! Agent configuration via `relic.toml`
//!
//! Everything needed to instantiate-and-go: application name(s), an
//! optional license, and agent settings to push into the config store.
//!
//! # Example
//!
//! ```toml
//! appname = ["svc-a", "svc-b"]
//! license = "0123456789abcdef"
//!
//! [settings]
//! "newrelic.framework" = "axum"
//! "newrelic.transaction_tracer.threshold" = "500"
//! ```

use std::path::Path;

use relic_core::{ConfigSet, FacadeError, Result};
use serde::{Deserialize, Serialize};

use crate::app_name::AppName;

/// Conventional config file name
pub const CONFIG_FILE_NAME: &str = "relic.toml";

/// Facade configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Application name(s) to report under; set at construction when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appname: Option<AppName>,

    /// License for the application name; defaults to `newrelic.license`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Agent settings merged into the facade and applied to the store
    #[serde(default, skip_serializing_if = "ConfigSet::is_empty")]
    pub settings: ConfigSet,
}

impl AgentConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the application name(s)
    pub fn with_appname(mut self, name: impl Into<AppName>) -> Self {
        self.appname = Some(name.into());
        self
    }

    /// Set the license
    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    /// Add a setting; the first value given for a key wins
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.entry(key.into()).or_insert_with(|| value.into());
        self
    }

    /// Parse a TOML document
    ///
    /// # Errors
    ///
    /// Returns [`FacadeError::InvalidConfig`] if the document does not parse.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FacadeError::invalid_config(e.to_string()))
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns [`FacadeError::InvalidConfig`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FacadeError::invalid_config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&content).map_err(|e| {
            FacadeError::invalid_config(format!(
                "failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FacadeError::invalid_config(format!("failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            FacadeError::invalid_config(format!(
                "failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
