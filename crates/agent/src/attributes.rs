//! Custom attributes and events attached to the current transaction
//!
//! ## Attribute values
//!
//! The agent accepts scalars only for custom parameters. Event attributes
//! are an ordered [`Attributes`] map; a `serde_json::Value` object converts
//! into one through [`Value::from`].

use relic_core::symbols::{
    ADD_CUSTOM_PARAMETER, ADD_CUSTOM_TRACER, CAPTURE_PARAMS, RECORD_CUSTOM_EVENT,
    SET_USER_ATTRIBUTES,
};
use relic_core::{Attributes, Value};

use crate::agent::Agent;

/// Attribute and event operations
pub trait CustomAttributes {
    /// Attach a key/value pair to the current transaction
    fn add_custom_parameter(&self, key: &str, value: Value) -> bool;

    /// Attach user, account and product to the current page view
    fn set_user_attributes(&self, user: &str, account: &str, product: &str) -> bool;

    /// Record a custom event with the given attributes
    fn record_custom_event(&self, name: &str, attributes: &Attributes);

    /// Enable or disable capture of request parameters
    fn capture_params(&self, enable: bool);

    /// Instrument `callable` with a custom tracer
    ///
    /// `callable` is `function_name` or `Type::method`.
    fn add_custom_tracer(&self, callable: &str) -> bool;
}

impl CustomAttributes for Agent {
    fn add_custom_parameter(&self, key: &str, value: Value) -> bool {
        self.invoke_bool(ADD_CUSTOM_PARAMETER, || vec![Value::from(key), value])
    }

    fn set_user_attributes(&self, user: &str, account: &str, product: &str) -> bool {
        self.invoke_bool(SET_USER_ATTRIBUTES, || {
            vec![Value::from(user), Value::from(account), Value::from(product)]
        })
    }

    fn record_custom_event(&self, name: &str, attributes: &Attributes) {
        self.invoke_void(RECORD_CUSTOM_EVENT, || {
            vec![Value::from(name), Value::Object(attributes.clone())]
        })
    }

    fn capture_params(&self, enable: bool) {
        self.invoke_void(CAPTURE_PARAMS, || vec![Value::Bool(enable)])
    }

    fn add_custom_tracer(&self, callable: &str) -> bool {
        self.invoke_bool(ADD_CUSTOM_TRACER, || vec![Value::from(callable)])
    }
}
