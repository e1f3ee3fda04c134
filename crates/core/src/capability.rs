//! The capability boundary
//!
//! A [`Capability`] is the optionally-present monitoring agent, seen as a
//! flat namespace of callable symbols. Facades never assume the full set is
//! present together: presence of the agent as a whole is probed once with
//! [`Capability::is_loaded`], and individual symbols can be checked with
//! [`Capability::function_exists`].
//!
//! ## Implementations
//!
//! - [`NullCapability`]: no agent in this process; every facade degrades
//! - [`SymbolTable`](crate::SymbolTable): host-bound table of closures
//! - [`RecordingCapability`](crate::testing::RecordingCapability): spy for tests

use std::time::Instant;

use crate::error::CapabilityError;
use crate::value::Value;

/// Optionally-present monitoring agent keyed by symbol name
///
/// Implementations must be cheap to share; facades hold them behind `Arc`.
pub trait Capability: Send + Sync {
    /// Whether the agent is loaded in this process at all
    ///
    /// Facades call this once, at construction, and cache the answer.
    fn is_loaded(&self) -> bool;

    /// Whether the agent exposes `symbol`
    fn function_exists(&self, symbol: &str) -> bool;

    /// Invoke `symbol` with `args`, returning its result verbatim
    fn call(&self, symbol: &str, args: &[Value]) -> Result<Value, CapabilityError>;

    /// Invoke `symbol` around a unit of caller work that the agent times
    ///
    /// The default implementation runs `work` locally, appends the elapsed
    /// milliseconds as a trailing `Float` argument, then delegates to
    /// [`Capability::call`]. Agents with native segment timing override it.
    fn call_timed(
        &self,
        symbol: &str,
        work: &mut dyn FnMut(),
        args: &[Value],
    ) -> Result<Value, CapabilityError> {
        let started = Instant::now();
        work();
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

        let mut args = args.to_vec();
        args.push(Value::Float(elapsed_ms));
        self.call(symbol, &args)
    }
}

/// The absent agent
///
/// Reports not-loaded and exposes no symbols. Calls are answered with
/// [`CapabilityError::UnknownSymbol`], though a gated facade never makes one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCapability;

impl Capability for NullCapability {
    fn is_loaded(&self) -> bool {
        false
    }

    fn function_exists(&self, _symbol: &str) -> bool {
        false
    }

    fn call(&self, symbol: &str, _args: &[Value]) -> Result<Value, CapabilityError> {
        Err(CapabilityError::unknown(symbol))
    }
}
