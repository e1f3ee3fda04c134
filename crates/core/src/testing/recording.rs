//! Spy capability
//!
//! Records every presence probe, symbol lookup and call, so tests can assert
//! both what reached the agent and that nothing did.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::capability::Capability;
use crate::error::CapabilityError;
use crate::value::Value;

/// One call observed by [`RecordingCapability`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// Symbol invoked
    pub symbol: String,
    /// Arguments, exactly as received
    pub args: Vec<Value>,
    /// Whether the call came through `call_timed`
    pub timed: bool,
}

/// Spy agent
///
/// Every symbol answers `Bool(true)` unless configured otherwise with
/// [`respond`](Self::respond) or [`fail`](Self::fail). By default every
/// symbol exists; [`only`](Self::only) narrows the exposed set to emulate an
/// older agent.
#[derive(Debug, Default)]
pub struct RecordingCapability {
    loaded: bool,
    supported: Option<HashSet<String>>,
    responses: HashMap<String, Value>,
    failures: HashMap<String, String>,
    calls: Mutex<Vec<RecordedCall>>,
    probes: AtomicUsize,
    lookups: AtomicUsize,
}

impl RecordingCapability {
    /// A loaded agent
    pub fn present() -> Self {
        RecordingCapability {
            loaded: true,
            ..Default::default()
        }
    }

    /// An agent that is not loaded
    pub fn absent() -> Self {
        RecordingCapability::default()
    }

    /// Answer calls to `symbol` with `value`
    pub fn respond(mut self, symbol: impl Into<String>, value: Value) -> Self {
        self.responses.insert(symbol.into(), value);
        self
    }

    /// Fail calls to `symbol` with `reason`
    pub fn fail(mut self, symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        self.failures.insert(symbol.into(), reason.into());
        self
    }

    /// Expose only `symbols`
    pub fn only<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported = Some(symbols.into_iter().map(Into::into).collect());
        self
    }

    /// Every recorded call, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    /// Recorded calls to `symbol`, in order
    pub fn calls_to(&self, symbol: &str) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.symbol == symbol)
            .cloned()
            .collect()
    }

    /// Arguments of the only call to `symbol`
    ///
    /// # Panics
    ///
    /// Panics unless `symbol` was called exactly once.
    pub fn single_call_args(&self, symbol: &str) -> Vec<Value> {
        let calls = self.calls_to(symbol);
        assert_eq!(calls.len(), 1, "expected exactly one call to {symbol}, got {calls:?}");
        calls.into_iter().next().map(|c| c.args).unwrap_or_default()
    }

    /// Total recorded calls
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Times `is_loaded` was asked
    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }

    /// Times `function_exists` was asked
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn exposes(&self, symbol: &str) -> bool {
        self.loaded
            && self
                .supported
                .as_ref()
                .map_or(true, |set| set.contains(symbol))
    }

    fn record(&self, symbol: &str, args: &[Value], timed: bool) -> Result<Value, CapabilityError> {
        self.calls.lock().push(RecordedCall {
            symbol: symbol.to_string(),
            args: args.to_vec(),
            timed,
        });

        if !self.exposes(symbol) {
            return Err(CapabilityError::unknown(symbol));
        }
        if let Some(reason) = self.failures.get(symbol) {
            return Err(CapabilityError::rejected(symbol, reason.clone()));
        }
        Ok(self
            .responses
            .get(symbol)
            .cloned()
            .unwrap_or(Value::Bool(true)))
    }
}

impl Capability for RecordingCapability {
    fn is_loaded(&self) -> bool {
        self.probes.fetch_add(1, Ordering::SeqCst);
        self.loaded
    }

    fn function_exists(&self, symbol: &str) -> bool {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.exposes(symbol)
    }

    fn call(&self, symbol: &str, args: &[Value]) -> Result<Value, CapabilityError> {
        self.record(symbol, args, false)
    }

    // Runs the work but records the arguments untouched, so tests can
    // compare them without a timing value appended.
    fn call_timed(
        &self,
        symbol: &str,
        work: &mut dyn FnMut(),
        args: &[Value],
    ) -> Result<Value, CapabilityError> {
        if self.exposes(symbol) {
            work();
        }
        self.record(symbol, args, true)
    }
}
