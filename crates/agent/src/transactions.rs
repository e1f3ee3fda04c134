//! Transactions - naming and lifecycle of the current unit of work
//!
//! ## License defaulting
//!
//! `set_appname` and `start_transaction` accept an optional license. When
//! none is given, the store's `newrelic.license` is used if it holds a
//! value. With no license at all, only the name is sent and the agent falls
//! back to its own configuration.
//!
//! | Facade | Agent call |
//! |--------|------------|
//! | `set_appname(n, Some(l), x)` | `newrelic_set_appname(n, l, x)` |
//! | `set_appname(n, None, _)` | `newrelic_set_appname(n)` |
//! | `start_transaction(n, Some(l))` | `newrelic_start_transaction(n, l)` |
//! | `end_transaction(ignore)` | `newrelic_end_transaction(ignore)` |

use relic_core::symbols::{
    BACKGROUND_JOB, END_OF_TRANSACTION, END_TRANSACTION, IGNORE_APDEX, IGNORE_TRANSACTION,
    NAME_TRANSACTION, SET_APPNAME, START_TRANSACTION,
};
use relic_core::Value;

use crate::agent::Agent;
use crate::app_name::AppName;

/// Transaction operations
pub trait Transactions {
    /// Set the application name(s) data is reported under
    ///
    /// Multiple names are joined with `;`, primary first. `xmit` asks the
    /// agent to send data gathered so far under the old name before
    /// switching; it is only meaningful alongside a license.
    fn set_appname(&self, name: AppName, license: Option<&str>, xmit: bool) -> bool;

    /// Name the current transaction
    ///
    /// Without this, transactions are named after the request URI.
    fn name_transaction(&self, name: &str) -> bool;

    /// Start a new transaction, usually after ending one manually
    fn start_transaction(&self, appname: &str, license: Option<&str>) -> bool;

    /// End the current transaction
    ///
    /// With `ignore`, the data gathered so far is discarded.
    fn end_transaction(&self, ignore: bool) -> bool;

    /// Stop timing the transaction but keep collecting its data
    fn end_of_transaction(&self);

    /// Do not report the current transaction
    fn ignore_transaction(&self);

    /// Exclude the current transaction from the Apdex score
    fn ignore_apdex(&self);

    /// Mark the current transaction as a background job (or as a web
    /// transaction, with `false`)
    fn background_job(&self, flag: bool);
}

impl Transactions for Agent {
    fn set_appname(&self, name: AppName, license: Option<&str>, xmit: bool) -> bool {
        self.invoke_bool(SET_APPNAME, || {
            let joined = Value::from(name.joined());
            match self.license_or_default(license) {
                Some(license) => vec![joined, Value::from(license), Value::Bool(xmit)],
                None => vec![joined],
            }
        })
    }

    fn name_transaction(&self, name: &str) -> bool {
        self.invoke_bool(NAME_TRANSACTION, || vec![Value::from(name)])
    }

    fn start_transaction(&self, appname: &str, license: Option<&str>) -> bool {
        self.invoke_bool(START_TRANSACTION, || {
            let mut args = vec![Value::from(appname)];
            args.extend(self.license_or_default(license).map(Value::from));
            args
        })
    }

    fn end_transaction(&self, ignore: bool) -> bool {
        self.invoke_bool(END_TRANSACTION, || vec![Value::Bool(ignore)])
    }

    fn end_of_transaction(&self) {
        self.invoke_void(END_OF_TRANSACTION, Vec::new)
    }

    fn ignore_transaction(&self) {
        self.invoke_void(IGNORE_TRANSACTION, Vec::new)
    }

    fn ignore_apdex(&self) {
        self.invoke_void(IGNORE_APDEX, Vec::new)
    }

    fn background_job(&self, flag: bool) {
        self.invoke_void(BACKGROUND_JOB, || vec![Value::Bool(flag)])
    }
}
