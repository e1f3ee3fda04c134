//! Shared test utilities for the integration suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
pub use relic::testing::{RecordedCall, RecordingCapability};
pub use relic::{Environment, MemoryConfigStore, Value};

// ============================================================================
// Environments
// ============================================================================

/// Spy agent that is loaded, plus an environment around it
pub fn present() -> (Arc<RecordingCapability>, Environment) {
    spy_env(RecordingCapability::present())
}

/// Spy agent that is not loaded, plus an environment around it
pub fn absent() -> (Arc<RecordingCapability>, Environment) {
    spy_env(RecordingCapability::absent())
}

/// Environment around an already configured spy
pub fn spy_env(spy: RecordingCapability) -> (Arc<RecordingCapability>, Environment) {
    let spy = Arc::new(spy);
    let env = Environment::with_capability(spy.clone());
    (spy, env)
}

/// Environment around a spy and an inspectable store
pub fn spy_env_with_store(
    spy: RecordingCapability,
) -> (Arc<RecordingCapability>, Arc<MemoryConfigStore>, Environment) {
    let spy = Arc::new(spy);
    let store = Arc::new(MemoryConfigStore::new());
    let env = Environment::new(spy.clone(), store.clone());
    (spy, store, env)
}

/// Symbols of every recorded call, in order
pub fn symbols(spy: &RecordingCapability) -> Vec<String> {
    spy.calls().into_iter().map(|c| c.symbol).collect()
}

// ============================================================================
// Log capture
// ============================================================================

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a scoped subscriber and return everything it logged
pub fn capture_logs<F: FnOnce()>(f: F) -> String {
    let buffer = Buffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}
