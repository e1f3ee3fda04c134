//! Test doubles for the capability boundary
//!
//! - **RecordingCapability**: spy agent recording every probe and call
//!
//! # Example
//!
//! ```
//! use relic_core::testing::RecordingCapability;
//! use relic_core::{Capability, Value};
//!
//! let spy = RecordingCapability::present()
//!     .respond("newrelic_get_browser_timing_header", Value::from("<script>"));
//!
//! assert!(spy.is_loaded());
//! spy.call("newrelic_get_browser_timing_header", &[Value::Bool(true)]).unwrap();
//! assert_eq!(spy.probe_count(), 1);
//! assert_eq!(spy.calls_to("newrelic_get_browser_timing_header").len(), 1);
//! ```

mod recording;

pub use recording::{RecordedCall, RecordingCapability};
