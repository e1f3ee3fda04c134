//! Distributed tracing - propagate trace context across service hops
//!
//! Outbound: [`DistributedTracing::insert_distributed_trace_headers`] sends
//! the caller's current headers; the agent answers with the headers it
//! wants added (`newrelic`, `traceparent`, `tracestate`), which are merged
//! into the caller's map.
//!
//! Inbound: [`DistributedTracing::accept_distributed_trace_headers`] hands
//! received headers to the agent together with how they arrived.

use std::collections::BTreeMap;
use std::fmt;

use relic_core::symbols::{ACCEPT_DISTRIBUTED_TRACE_HEADERS, INSERT_DISTRIBUTED_TRACE_HEADERS};
use relic_core::{Attributes, Value};
use serde::{Deserialize, Serialize};

use crate::agent::Agent;

/// Header name to value
pub type Headers = BTreeMap<String, String>;

/// How inbound trace headers arrived
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportType {
    /// Unknown transport
    Unknown,
    /// Plain HTTP
    #[default]
    #[serde(rename = "HTTP")]
    Http,
    /// HTTP over TLS
    #[serde(rename = "HTTPS")]
    Https,
    /// Kafka
    Kafka,
    /// JMS
    #[serde(rename = "JMS")]
    Jms,
    /// IronMQ
    IronMQ,
    /// AMQP
    #[serde(rename = "AMQP")]
    Amqp,
    /// Any other queue
    Queue,
    /// Anything else
    Other,
}

impl TransportType {
    /// The name the agent expects
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportType::Unknown => "Unknown",
            TransportType::Http => "HTTP",
            TransportType::Https => "HTTPS",
            TransportType::Kafka => "Kafka",
            TransportType::Jms => "JMS",
            TransportType::IronMQ => "IronMQ",
            TransportType::Amqp => "AMQP",
            TransportType::Queue => "Queue",
            TransportType::Other => "Other",
        }
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn headers_value(headers: &Headers) -> Value {
    Value::Object(
        headers
            .iter()
            .map(|(k, v)| (k.clone(), Value::from(v)))
            .collect::<Attributes>(),
    )
}

/// Distributed tracing operations
pub trait DistributedTracing {
    /// Add outbound trace headers to `headers`
    ///
    /// Existing entries with the same name are replaced. Returns `false`,
    /// leaving `headers` untouched, when nothing was inserted.
    fn insert_distributed_trace_headers(&self, headers: &mut Headers) -> bool;

    /// Accept inbound trace headers for the current transaction
    fn accept_distributed_trace_headers(&self, headers: &Headers, transport: TransportType) -> bool;
}

impl DistributedTracing for Agent {
    fn insert_distributed_trace_headers(&self, headers: &mut Headers) -> bool {
        let Some(answer) = self.invoke(INSERT_DISTRIBUTED_TRACE_HEADERS, || {
            vec![headers_value(headers)]
        }) else {
            return false;
        };

        match answer {
            Value::Object(inserted) => {
                let mut any = false;
                for (name, value) in inserted {
                    if let Some(value) = value.into_string() {
                        headers.insert(name, value);
                        any = true;
                    }
                }
                any
            }
            other => other.is_truthy(),
        }
    }

    fn accept_distributed_trace_headers(&self, headers: &Headers, transport: TransportType) -> bool {
        self.invoke_bool(ACCEPT_DISTRIBUTED_TRACE_HEADERS, || {
            vec![headers_value(headers), Value::from(transport.as_str())]
        })
    }
}
