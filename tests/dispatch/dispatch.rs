//! Dispatch outcomes for absent, unsupported, failing and supported symbols.

use crate::common::*;
use relic::symbols::{CUSTOM_METRIC, NAME_TRANSACTION, SET_APPNAME};
use relic::DynamicAgent;

#[test]
fn absent_agent_answers_false() {
    let (spy, env) = absent();
    let agent = DynamicAgent::new(&env);

    assert!(!agent.is_loaded());
    assert_eq!(agent.call("nameTransaction", &[Value::from("checkout")]), Value::FALSE);
    assert_eq!(spy.call_count(), 0);
    assert_eq!(spy.lookup_count(), 0);
}

#[test]
fn unsupported_operation_answers_false() {
    let (spy, env) = spy_env(RecordingCapability::present().only([SET_APPNAME]));
    let agent = DynamicAgent::new(&env);

    assert_eq!(agent.call("recordFancyThing", &[Value::Int(1)]), Value::FALSE);
    assert_eq!(spy.call_count(), 0);
    assert_eq!(spy.lookup_count(), 1);
}

#[test]
fn supports_separates_absent_from_unsupported() {
    let (_spy, env) = spy_env(RecordingCapability::present().only([SET_APPNAME]));
    let present = DynamicAgent::new(&env);
    let (_spy, env) = absent();
    let missing = DynamicAgent::new(&env);

    // same sentinel for both
    assert_eq!(present.call("ignoreApdex", &[]), missing.call("ignoreApdex", &[]));

    assert!(present.supports("setAppname"));
    assert!(!present.supports("ignoreApdex"));
    assert!(!missing.supports("setAppname"));
}

#[test]
fn supported_operation_passes_through() {
    let (spy, env) = spy_env(RecordingCapability::present().respond(CUSTOM_METRIC, Value::Int(7)));
    let agent = DynamicAgent::new(&env);
    let args = [Value::from("Custom/x"), Value::Float(1.5)];

    assert_eq!(agent.call("customMetric", &args), Value::Int(7));
    assert_eq!(spy.single_call_args(CUSTOM_METRIC), args.to_vec());
}

#[test]
fn failures_answer_false_and_warn() {
    let (_spy, env) = spy_env(RecordingCapability::present().fail(NAME_TRANSACTION, "busy"));
    let agent = DynamicAgent::new(&env);

    let logs = capture_logs(|| {
        assert_eq!(agent.call("nameTransaction", &[]), Value::FALSE);
    });
    assert!(logs.contains("WARN"));
    assert!(logs.contains("busy"));
}

#[test]
fn construction_with_appname() {
    let (spy, env) = present();
    let agent = DynamicAgent::with_appname(&env, "svc-a");
    assert!(agent.is_loaded());
    assert_eq!(spy.single_call_args(SET_APPNAME), vec![Value::from("svc-a")]);

    let (spy, env) = absent();
    DynamicAgent::with_appname(&env, "svc-a");
    assert_eq!(spy.call_count(), 0);
}

#[test]
fn presence_is_probed_once() {
    let (spy, env) = present();
    let agent = DynamicAgent::new(&env);
    for _ in 0..10 {
        agent.call("ignoreApdex", &[]);
        agent.supports("ignoreApdex");
    }
    assert_eq!(spy.probe_count(), 1);
}

#[test]
fn shared_across_threads() {
    let (spy, env) = present();
    let agent = std::sync::Arc::new(DynamicAgent::new(&env));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let agent = agent.clone();
            std::thread::spawn(move || {
                agent.call("nameTransaction", &[Value::Int(i)]);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(spy.calls_to(NAME_TRANSACTION).len(), 4);
    assert_eq!(spy.probe_count(), 1);
}
