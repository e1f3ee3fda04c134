//! The facade over a host-bound symbol table, as a real host wires it.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::common::capture_logs;
use parking_lot::Mutex;
use relic::symbols::*;
use relic::{
    Agent, Browser, CapabilityError, DynamicAgent, Environment, Metrics, SymbolTable, Transactions,
    Value, DatastoreParams,
};

/// Minimal in-process agent: remembers the transaction name
fn host_table(name: Arc<Mutex<Option<String>>>) -> SymbolTable {
    SymbolTable::builder()
        .constant(SET_APPNAME, Value::Bool(true))
        .bind(NAME_TRANSACTION, move |args| match args.first().and_then(Value::as_str) {
            Some(n) => {
                *name.lock() = Some(n.to_string());
                Ok(Value::Bool(true))
            }
            None => Err(CapabilityError::rejected(NAME_TRANSACTION, "name required")),
        })
        .constant(
            GET_BROWSER_TIMING_HEADER,
            Value::from("<script>window.NREUM={}</script>"),
        )
        .bind(RECORD_DATASTORE_SEGMENT, |args| {
            // the default timed call appends elapsed milliseconds
            match args.last() {
                Some(Value::Float(ms)) if *ms >= 0.0 => Ok(Value::Bool(true)),
                _ => Err(CapabilityError::rejected(RECORD_DATASTORE_SEGMENT, "missing timing")),
            }
        })
        .build()
}

#[test]
fn enumerated_facade_over_table() {
    let name = Arc::new(Mutex::new(None));
    let env = Environment::with_capability(Arc::new(host_table(name.clone())));
    let agent = Agent::with_appname(&env, "svc-a", None);

    assert!(agent.is_loaded());
    assert!(agent.name_transaction("checkout"));
    assert_eq!(name.lock().as_deref(), Some("checkout"));
    assert_eq!(
        agent.browser_timing_header(true),
        "<script>window.NREUM={}</script>"
    );
    assert_eq!(
        agent.record_datastore_segment(&DatastoreParams::new("Redis"), || "PONG"),
        Some("PONG")
    );

    // symbol missing from this agent build
    assert!(!agent.disable_autorum());
}

#[test]
fn dynamic_facade_over_same_table() {
    let name = Arc::new(Mutex::new(None));
    let env = Environment::with_capability(Arc::new(host_table(name.clone())));
    let agent = DynamicAgent::new(&env);

    assert_eq!(
        agent.call("nameTransaction", &[Value::from("orders")]),
        Value::Bool(true)
    );
    assert_eq!(name.lock().as_deref(), Some("orders"));
    assert!(!agent.supports("disableAutorum"));
    assert_eq!(agent.call("disableAutorum", &[]), Value::FALSE);
}

#[test]
fn table_without_probe_symbol_is_absent() {
    let table = SymbolTable::builder()
        .constant(NAME_TRANSACTION, Value::Bool(true))
        .build();
    let agent = Agent::new(&Environment::with_capability(Arc::new(table)));

    assert!(!agent.is_loaded());
    assert!(!agent.name_transaction("checkout"));
}

#[test]
fn missing_symbol_is_not_warned() {
    let env = Environment::with_capability(Arc::new(host_table(Arc::default())));
    let agent = Agent::new(&env);

    let logs = capture_logs(|| {
        for _ in 0..3 {
            assert!(!agent.disable_autorum());
        }
    });
    assert!(!logs.contains("WARN"), "unexpected warning: {logs}");
    assert!(logs.contains(DISABLE_AUTORUM));
}

#[test]
fn segment_work_skipped_without_segment_symbol() {
    let table = SymbolTable::builder()
        .constant(SET_APPNAME, Value::Bool(true))
        .build();
    let agent = Agent::new(&Environment::with_capability(Arc::new(table)));
    let runs = AtomicUsize::new(0);

    let out = agent.record_datastore_segment(&DatastoreParams::new("Redis"), || {
        runs.fetch_add(1, Ordering::SeqCst);
        "PONG"
    });
    assert_eq!(out, None);
    assert_eq!(runs.load(Ordering::SeqCst), 0);
}

#[test]
fn segment_result_kept_when_agent_rejects() {
    let table = SymbolTable::builder()
        .constant(SET_APPNAME, Value::Bool(true))
        .bind(RECORD_DATASTORE_SEGMENT, |_| {
            Err(CapabilityError::rejected(RECORD_DATASTORE_SEGMENT, "segment limit"))
        })
        .build();
    let agent = Agent::new(&Environment::with_capability(Arc::new(table)));
    let runs = AtomicUsize::new(0);

    let logs = capture_logs(|| {
        let out = agent.record_datastore_segment(&DatastoreParams::new("MySQL"), || {
            runs.fetch_add(1, Ordering::SeqCst);
            vec![1, 2]
        });
        assert_eq!(out, Some(vec![1, 2]));
    });
    assert_eq!(runs.load(Ordering::SeqCst), 1);
    assert!(logs.contains("WARN"));
    assert!(logs.contains("Datastore segment not recorded"));
}
