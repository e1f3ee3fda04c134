//! Agent symbol names
//!
//! The agent exposes a flat namespace of functions, all prefixed with
//! [`SYMBOL_PREFIX`]. The enumerated facade names each symbol explicitly
//! through the constants below; the dynamic facade derives them at call
//! time with [`symbol_name`].

/// Namespace prefix shared by every agent function
pub const SYMBOL_PREFIX: &str = "newrelic_";

/// Symbol whose presence marks the agent as loaded
pub const PROBE_SYMBOL: &str = SET_APPNAME;

/// Configuration key holding the default license
pub const LICENSE_KEY: &str = "newrelic.license";

/// Configuration namespace owned by the agent
pub const CONFIG_NAMESPACE: &str = "newrelic";

/// Agent function `newrelic_add_custom_parameter`
pub const ADD_CUSTOM_PARAMETER: &str = "newrelic_add_custom_parameter";
/// Agent function `newrelic_add_custom_tracer`
pub const ADD_CUSTOM_TRACER: &str = "newrelic_add_custom_tracer";
/// Agent function `newrelic_background_job`
pub const BACKGROUND_JOB: &str = "newrelic_background_job";
/// Agent function `newrelic_capture_params`
pub const CAPTURE_PARAMS: &str = "newrelic_capture_params";
/// Agent function `newrelic_custom_metric`
pub const CUSTOM_METRIC: &str = "newrelic_custom_metric";
/// Agent function `newrelic_disable_autorum`
pub const DISABLE_AUTORUM: &str = "newrelic_disable_autorum";
/// Agent function `newrelic_end_of_transaction`
pub const END_OF_TRANSACTION: &str = "newrelic_end_of_transaction";
/// Agent function `newrelic_end_transaction`
pub const END_TRANSACTION: &str = "newrelic_end_transaction";
/// Agent function `newrelic_get_browser_timing_footer`
pub const GET_BROWSER_TIMING_FOOTER: &str = "newrelic_get_browser_timing_footer";
/// Agent function `newrelic_get_browser_timing_header`
pub const GET_BROWSER_TIMING_HEADER: &str = "newrelic_get_browser_timing_header";
/// Agent function `newrelic_ignore_apdex`
pub const IGNORE_APDEX: &str = "newrelic_ignore_apdex";
/// Agent function `newrelic_ignore_transaction`
pub const IGNORE_TRANSACTION: &str = "newrelic_ignore_transaction";
/// Agent function `newrelic_name_transaction`
pub const NAME_TRANSACTION: &str = "newrelic_name_transaction";
/// Agent function `newrelic_notice_error`
pub const NOTICE_ERROR: &str = "newrelic_notice_error";
/// Agent function `newrelic_record_custom_event`
pub const RECORD_CUSTOM_EVENT: &str = "newrelic_record_custom_event";
/// Agent function `newrelic_record_datastore_segment`
pub const RECORD_DATASTORE_SEGMENT: &str = "newrelic_record_datastore_segment";
/// Agent function `newrelic_set_appname`
pub const SET_APPNAME: &str = "newrelic_set_appname";
/// Agent function `newrelic_set_user_attributes`
pub const SET_USER_ATTRIBUTES: &str = "newrelic_set_user_attributes";
/// Agent function `newrelic_start_transaction`
pub const START_TRANSACTION: &str = "newrelic_start_transaction";
/// Agent function `newrelic_insert_distributed_trace_headers`
pub const INSERT_DISTRIBUTED_TRACE_HEADERS: &str = "newrelic_insert_distributed_trace_headers";
/// Agent function `newrelic_accept_distributed_trace_headers`
pub const ACCEPT_DISTRIBUTED_TRACE_HEADERS: &str = "newrelic_accept_distributed_trace_headers";

/// Translate a camelCase call name into the agent's symbol name
///
/// An underscore is inserted between every lowercase-then-uppercase ASCII
/// pair, the result is lowercased, and [`SYMBOL_PREFIX`] is prepended:
///
/// ```
/// use relic_core::symbol_name;
///
/// assert_eq!(symbol_name("setAppname"), "newrelic_set_appname");
/// assert_eq!(symbol_name("getBrowserTimingHeader"), "newrelic_get_browser_timing_header");
/// ```
///
/// Total over any input; non-ASCII characters pass through lowercased.
pub fn symbol_name(call: &str) -> String {
    let mut out = String::with_capacity(SYMBOL_PREFIX.len() + call.len() + 4);
    out.push_str(SYMBOL_PREFIX);

    let mut prev: Option<char> = None;
    for c in call.chars() {
        if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
            out.push('_');
        }
        out.extend(c.to_lowercase());
        prev = Some(c);
    }
    out
}
