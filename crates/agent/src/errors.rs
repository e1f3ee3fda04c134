//! Error reporting
//!
//! The agent takes a message and, optionally, the cause. A cause is sent as
//! an object with its display text and source chain, outermost first:
//!
//! ```text
//! { "message": "connection reset", "chain": ["io error", "os error 104"] }
//! ```

use std::error::Error;

use relic_core::symbols::NOTICE_ERROR;
use relic_core::{Attributes, Value};

use crate::agent::Agent;

/// Error reporting operations
pub trait Errors {
    /// Report an error on the current transaction
    fn notice_error(&self, message: &str, cause: Option<&(dyn Error + 'static)>);

    /// Report `error`, using its display text as the message
    fn notice_err(&self, error: &(dyn Error + 'static)) {
        self.notice_error(&error.to_string(), Some(error));
    }
}

/// The object sent for a cause
fn cause_value(cause: &(dyn Error + 'static)) -> Value {
    let mut chain = Vec::new();
    let mut source = cause.source();
    while let Some(err) = source {
        chain.push(Value::from(err.to_string()));
        source = err.source();
    }

    let mut object = Attributes::new();
    object.insert("message".into(), Value::from(cause.to_string()));
    object.insert("chain".into(), Value::Array(chain));
    Value::Object(object)
}

impl Errors for Agent {
    fn notice_error(&self, message: &str, cause: Option<&(dyn Error + 'static)>) {
        self.invoke_void(NOTICE_ERROR, || {
            let mut args = vec![Value::from(message)];
            args.extend(cause.map(cause_value));
            args
        })
    }
}
