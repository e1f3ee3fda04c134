//! Metrics - custom timings and datastore segments
//!
//! ## Datastore segments
//!
//! [`Metrics::record_datastore_segment`] hands the caller's closure to the
//! agent, which times it and records a segment described by
//! [`DatastoreParams`]. The closure's own return value comes back to the
//! caller.
//!
//! `None` always means the closure did not run. Once it has run, its result
//! is returned even if the segment itself could not be recorded.
//!
//! | Agent | Closure runs | Returns |
//! |-------|--------------|---------|
//! | absent | no | `None` |
//! | present, symbol missing | no | `None` |
//! | present, accepted | once | `Some(result)` |
//! | present, rejected | once | `Some(result)` (warned) |

use relic_core::symbols::{CUSTOM_METRIC, RECORD_DATASTORE_SEGMENT};
use relic_core::{Attributes, Value};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::agent::Agent;

/// Description of a datastore segment
///
/// Only `product` is required by the agent; unset fields are omitted from
/// the parameter object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatastoreParams {
    /// Datastore product, e.g. `MySQL`
    pub product: String,
    /// Table or collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    /// Operation, e.g. `select`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    /// Datastore host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Port, socket path or other instance identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_path_or_id: Option<String>,
    /// Database name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// Query text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl DatastoreParams {
    /// Parameters for `product`
    pub fn new(product: impl Into<String>) -> Self {
        DatastoreParams {
            product: product.into(),
            ..Default::default()
        }
    }

    /// Set the collection
    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    /// Set the operation
    pub fn operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Set the host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the port, socket path or instance id
    pub fn port_path_or_id(mut self, id: impl Into<String>) -> Self {
        self.port_path_or_id = Some(id.into());
        self
    }

    /// Set the database name
    pub fn database_name(mut self, name: impl Into<String>) -> Self {
        self.database_name = Some(name.into());
        self
    }

    /// Set the query text
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// The parameter object sent to the agent, keyed as it expects
    pub fn to_value(&self) -> Value {
        let mut object = Attributes::new();
        object.insert("product".into(), Value::from(&self.product));

        let optional = [
            ("collection", &self.collection),
            ("operation", &self.operation),
            ("host", &self.host),
            ("portPathOrId", &self.port_path_or_id),
            ("databaseName", &self.database_name),
            ("query", &self.query),
        ];
        for (key, field) in optional {
            if let Some(value) = field {
                object.insert(key.into(), Value::from(value));
            }
        }
        Value::Object(object)
    }
}

/// Metric operations
pub trait Metrics {
    /// Record a custom metric, in milliseconds
    ///
    /// The agent only accepts names under `Custom/`.
    fn custom_metric(&self, metric: &str, value_ms: f64) -> bool;

    /// Time `work` as a datastore segment and return its result
    fn record_datastore_segment<T, F>(&self, params: &DatastoreParams, work: F) -> Option<T>
    where
        Self: Sized,
        F: FnOnce() -> T;
}

impl Metrics for Agent {
    fn custom_metric(&self, metric: &str, value_ms: f64) -> bool {
        self.invoke_bool(CUSTOM_METRIC, || vec![Value::from(metric), Value::Float(value_ms)])
    }

    fn record_datastore_segment<T, F>(&self, params: &DatastoreParams, work: F) -> Option<T>
    where
        F: FnOnce() -> T,
    {
        if !self.is_loaded() {
            return None;
        }
        let capability = self.environment().capability();
        if !capability.function_exists(RECORD_DATASTORE_SEGMENT) {
            return None;
        }

        let mut work = Some(work);
        let mut output = None;
        let result = {
            let mut run = || {
                if let Some(work) = work.take() {
                    output = Some(work());
                }
            };
            capability.call_timed(RECORD_DATASTORE_SEGMENT, &mut run, &[params.to_value()])
        };

        if let Err(err) = result {
            warn!(
                target: "relic::agent",
                product = %params.product,
                ran = output.is_some(),
                error = %err,
                "Datastore segment not recorded"
            );
        }
        output
    }
}
