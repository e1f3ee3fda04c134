//! Configuration: additive merge, write-if-changed, live settings.

use crate::common::*;
use relic::{Agent, ConfigSet, ConfigStore, FacadeError};

fn set(pairs: &[(&str, &str)]) -> ConfigSet {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn first_value_wins() {
    let (_spy, env) = present();
    let agent = Agent::new(&env);

    agent.configure(set(&[("a", "1")])).unwrap();
    agent.configure(set(&[("a", "2"), ("b", "3")])).unwrap();

    assert_eq!(agent.settings(), set(&[("a", "1"), ("b", "3")]));
}

#[test]
fn only_changed_values_are_written() {
    let (_spy, store, env) = spy_env_with_store(RecordingCapability::present());
    store.set("newrelic.framework", "axum").unwrap();
    let agent = Agent::new(&env);

    let written = agent
        .configure(set(&[
            ("newrelic.framework", "axum"),
            ("newrelic.loglevel", "info"),
        ]))
        .unwrap();
    assert_eq!(written, 1);

    // reapplying the same set is a no-op
    assert_eq!(agent.configure(ConfigSet::new()).unwrap(), 0);
}

#[test]
fn external_drift_is_corrected_on_next_apply() {
    let (_spy, store, env) = spy_env_with_store(RecordingCapability::present());
    let agent = Agent::new(&env);
    agent.configure(set(&[("newrelic.loglevel", "info")])).unwrap();

    store.set("newrelic.loglevel", "debug").unwrap();
    assert_eq!(agent.configure(ConfigSet::new()).unwrap(), 1);
    assert_eq!(store.get("newrelic.loglevel").as_deref(), Some("info"));
}

#[test]
fn store_keys_are_never_removed() {
    let (_spy, store, env) = spy_env_with_store(RecordingCapability::present());
    store.set("newrelic.appname", "legacy").unwrap();
    let agent = Agent::new(&env);

    agent.configure(set(&[("newrelic.framework", "axum")])).unwrap();

    let live = agent.live_settings("newrelic");
    assert_eq!(live.len(), 2);
    assert_eq!(live.get("newrelic.appname").map(String::as_str), Some("legacy"));
    assert_eq!(agent.agent_settings(), live);
}

#[test]
fn live_settings_filter_by_namespace() {
    let (_spy, store, env) = spy_env_with_store(RecordingCapability::present());
    store.set("newrelic.framework", "axum").unwrap();
    store.set("newrelicx.other", "no").unwrap();
    store.set("opcache.enable", "1").unwrap();

    let agent = Agent::new(&env);
    assert_eq!(
        agent.live_settings("newrelic"),
        set(&[("newrelic.framework", "axum")])
    );
}

#[test]
fn invalid_keys_are_rejected_whole() {
    let (_spy, store, env) = spy_env_with_store(RecordingCapability::present());
    let agent = Agent::new(&env);

    let err = agent
        .configure(set(&[("newrelic.ok", "1"), ("", "2")]))
        .unwrap_err();

    assert!(matches!(err, FacadeError::InvalidSetting { .. }));
    assert!(agent.settings().is_empty());
    assert!(store.snapshot().is_empty());
}

#[test]
fn settings_writes_are_logged_at_debug() {
    let (_spy, env) = present();
    let agent = Agent::new(&env);
    let logs = capture_logs(|| {
        agent.configure(set(&[("newrelic.framework", "axum")])).unwrap();
    });
    assert!(logs.contains("DEBUG"), "missing debug log in: {logs}");
    assert!(logs.contains("newrelic.framework"));
}
