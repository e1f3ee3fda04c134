//! Absent agent: every operation returns its sentinel and nothing reaches
//! the agent or the store.

use crate::common::*;
use relic::symbols::LICENSE_KEY;
use relic::{
    Agent, Attributes, Browser, ConfigStore, CustomAttributes, DatastoreParams, DistributedTracing,
    Errors, Headers, Metrics, Transactions, TransportType,
};
use std::sync::Arc;

fn absent_agent() -> (Arc<RecordingCapability>, Agent) {
    let (spy, env) = absent();
    (spy, Agent::new(&env))
}

#[test]
fn rename_returns_false_without_calls() {
    let (spy, agent) = absent_agent();
    assert!(!agent.name_transaction("checkout"));
    assert_eq!(spy.call_count(), 0);
}

#[test]
fn header_snippet_is_empty() {
    let (spy, agent) = absent_agent();
    assert_eq!(agent.browser_timing_header(true), "");
    assert_eq!(agent.browser_timing_footer(true), "");
    assert_eq!(spy.call_count(), 0);
}

#[test]
fn every_bool_operation_is_false() {
    let (spy, agent) = absent_agent();
    let mut headers = Headers::new();

    let answers = [
        agent.set_appname("svc-a".into(), Some("key"), true),
        agent.name_transaction("checkout"),
        agent.start_transaction("svc-a", None),
        agent.end_transaction(false),
        agent.add_custom_parameter("k", Value::Int(1)),
        agent.set_user_attributes("u", "a", "p"),
        agent.add_custom_tracer("checkout"),
        agent.custom_metric("Custom/x", 1.0),
        agent.disable_autorum(),
        agent.insert_distributed_trace_headers(&mut headers),
        agent.accept_distributed_trace_headers(&headers, TransportType::Http),
    ];

    assert!(answers.iter().all(|answered| !answered));
    assert!(headers.is_empty());
    assert_eq!(spy.call_count(), 0);
}

#[test]
fn every_void_operation_is_skipped() {
    let (spy, agent) = absent_agent();
    agent.end_of_transaction();
    agent.ignore_transaction();
    agent.ignore_apdex();
    agent.background_job(true);
    agent.capture_params(true);
    agent.record_custom_event("Purchase", &Attributes::new());
    agent.notice_error("boom", None);
    agent.notice_err(&std::io::Error::new(std::io::ErrorKind::Other, "boom"));
    assert_eq!(spy.call_count(), 0);
}

#[test]
fn datastore_segment_is_none_and_work_skipped() {
    let (spy, agent) = absent_agent();
    let mut ran = 0;
    let out = agent.record_datastore_segment(&DatastoreParams::new("MySQL"), || {
        ran += 1;
        ran
    });
    assert_eq!(out, None);
    assert_eq!(ran, 0);
    assert_eq!(spy.call_count(), 0);
}

#[test]
fn store_is_never_touched() {
    let (spy, store, env) = spy_env_with_store(RecordingCapability::absent());
    store.set(LICENSE_KEY, "key").unwrap();
    store.set("newrelic.appname", "svc").unwrap();
    let before = store.snapshot();

    let agent = Agent::new(&env);
    agent.start_transaction("svc-a", None);
    agent
        .configure([("newrelic.framework".to_string(), "axum".to_string())].into())
        .unwrap();

    assert!(agent.live_settings("newrelic").is_empty());
    assert_eq!(store.snapshot(), before);
    assert_eq!(spy.call_count(), 0);
}

#[test]
fn absence_is_not_logged() {
    let logs = capture_logs(|| {
        let (_spy, agent) = absent_agent();
        agent.name_transaction("checkout");
        agent.custom_metric("Custom/x", 1.0);
        agent.record_datastore_segment(&DatastoreParams::new("MySQL"), || ());
    });
    assert!(logs.is_empty(), "unexpected logs: {logs}");
}

#[test]
fn trait_objects_degrade_too() {
    let (spy, agent) = absent_agent();
    let transactions: &dyn Transactions = &agent;
    let browser: &dyn Browser = &agent;
    let errors: &dyn Errors = &agent;

    assert!(!transactions.end_transaction(true));
    assert_eq!(browser.browser_timing_footer(false), "");
    errors.notice_error("boom", None);
    assert_eq!(spy.call_count(), 0);
}
