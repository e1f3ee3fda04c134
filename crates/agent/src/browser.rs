//! Browser timing - front-end monitoring snippets
//!
//! Snippets are plain HTML/JS strings. An absent agent, or one that returns
//! anything but a string, yields `""`, so templates can interpolate the
//! result unconditionally.
//!
//! Automatic injection is on by default and can only be turned off, through
//! [`Browser::disable_autorum`].

use relic_core::symbols::{DISABLE_AUTORUM, GET_BROWSER_TIMING_FOOTER, GET_BROWSER_TIMING_HEADER};
use relic_core::Value;

use crate::agent::Agent;

/// Browser snippet operations
pub trait Browser {
    /// The snippet for the page head; `tags` wraps it in `<script>` tags
    fn browser_timing_header(&self, tags: bool) -> String;

    /// The snippet for the end of the page body; `tags` as for the header
    fn browser_timing_footer(&self, tags: bool) -> String;

    /// Turn off automatic snippet injection for the current transaction
    fn disable_autorum(&self) -> bool;
}

impl Browser for Agent {
    fn browser_timing_header(&self, tags: bool) -> String {
        self.invoke_string(GET_BROWSER_TIMING_HEADER, || vec![Value::Bool(tags)])
    }

    fn browser_timing_footer(&self, tags: bool) -> String {
        self.invoke_string(GET_BROWSER_TIMING_FOOTER, || vec![Value::Bool(tags)])
    }

    fn disable_autorum(&self) -> bool {
        self.invoke_bool(DISABLE_AUTORUM, Vec::new)
    }
}
