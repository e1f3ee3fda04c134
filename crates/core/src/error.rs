//! Error types for the facade
//!
//! The facade has two error families, and neither covers an absent agent:
//! absence is a first-class degraded return, never an error.
//!
//! - [`CapabilityError`]: the agent is loaded but reported a failure for a
//!   delegated call. Facades convert it to the operation's sentinel and log
//!   a warning; callers never see it from an operation method.
//! - [`FacadeError`]: caller contract violations and configuration failures,
//!   returned from configuration entry points.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for facade configuration operations
pub type Result<T> = std::result::Result<T, FacadeError>;

/// Failure reported by a capability provider for one delegated call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    /// The provider does not expose the requested symbol
    #[error("unknown symbol: {symbol}")]
    UnknownSymbol {
        /// Symbol that was requested
        symbol: String,
    },

    /// The provider rejected the call (bad arguments, internal failure)
    #[error("{symbol} failed: {reason}")]
    Rejected {
        /// Symbol that was invoked
        symbol: String,
        /// Provider-supplied description
        reason: String,
    },
}

impl CapabilityError {
    /// Create an unknown-symbol error
    pub fn unknown(symbol: impl Into<String>) -> Self {
        CapabilityError::UnknownSymbol {
            symbol: symbol.into(),
        }
    }

    /// Create a rejected-call error
    pub fn rejected(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        CapabilityError::Rejected {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }
}

/// Errors surfaced by facade configuration entry points
#[derive(Debug, Error)]
pub enum FacadeError {
    /// A setting key or value violates the store's contract
    #[error("invalid setting '{key}': {reason}")]
    InvalidSetting {
        /// Offending key
        key: String,
        /// Why it was rejected
        reason: String,
    },

    /// Configuration could not be read or parsed
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Parser or I/O detail
        reason: String,
    },

    /// The external configuration store refused a write
    #[error("config store rejected '{key}': {reason}")]
    Store {
        /// Key being written
        key: String,
        /// Store-supplied description
        reason: String,
    },
}

impl FacadeError {
    /// Create an invalid-setting error
    pub fn invalid_setting(key: impl Into<String>, reason: impl Into<String>) -> Self {
        FacadeError::InvalidSetting {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-config error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        FacadeError::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create a store-write error
    pub fn store(key: impl Into<String>, reason: impl Into<String>) -> Self {
        FacadeError::Store {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
