//! Host-bound symbol table
//!
//! [`SymbolTable`] is the live capability table a host builds when it binds
//! the agent's functions (through FFI, an embedded runtime, or a sidecar
//! client). Each symbol maps to a closure over [`Value`] arguments.
//!
//! The table reports itself loaded only when it binds
//! [`PROBE_SYMBOL`](crate::symbols::PROBE_SYMBOL); a table missing the
//! application-name entry point is treated as a partial, unusable agent.
//!
//! # Example
//!
//! ```
//! use relic_core::{Capability, SymbolTable, Value};
//!
//! let table = SymbolTable::builder()
//!     .bind("newrelic_set_appname", |_| Ok(Value::Bool(true)))
//!     .bind("newrelic_name_transaction", |args| Ok(Value::Bool(!args.is_empty())))
//!     .build();
//!
//! assert!(table.is_loaded());
//! assert!(table.function_exists("newrelic_name_transaction"));
//! assert!(!table.function_exists("newrelic_ignore_apdex"));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::capability::Capability;
use crate::error::CapabilityError;
use crate::symbols::PROBE_SYMBOL;
use crate::value::Value;

/// Function bound to one agent symbol
pub type SymbolFn = Arc<dyn Fn(&[Value]) -> Result<Value, CapabilityError> + Send + Sync>;

/// Live capability table: symbol name to bound function
#[derive(Clone, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, SymbolFn>,
}

impl SymbolTable {
    /// Start building a table
    pub fn builder() -> SymbolTableBuilder {
        SymbolTableBuilder::default()
    }

    /// Number of bound symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether no symbols are bound
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Bound symbol names, sorted
    pub fn symbols(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.symbols.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolTable")
            .field("symbols", &self.symbols())
            .finish()
    }
}

impl Capability for SymbolTable {
    fn is_loaded(&self) -> bool {
        self.symbols.contains_key(PROBE_SYMBOL)
    }

    fn function_exists(&self, symbol: &str) -> bool {
        self.symbols.contains_key(symbol)
    }

    fn call(&self, symbol: &str, args: &[Value]) -> Result<Value, CapabilityError> {
        match self.symbols.get(symbol) {
            Some(f) => f(args),
            None => Err(CapabilityError::unknown(symbol)),
        }
    }
}

/// Builder for [`SymbolTable`]
#[derive(Default)]
pub struct SymbolTableBuilder {
    symbols: HashMap<String, SymbolFn>,
}

impl SymbolTableBuilder {
    /// Bind `symbol` to `f`, replacing any earlier binding
    pub fn bind<F>(mut self, symbol: impl Into<String>, f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, CapabilityError> + Send + Sync + 'static,
    {
        self.symbols.insert(symbol.into(), Arc::new(f));
        self
    }

    /// Bind `symbol` to a function that always returns `value`
    pub fn constant(self, symbol: impl Into<String>, value: Value) -> Self {
        self.bind(symbol, move |_| Ok(value.clone()))
    }

    /// Finish the table
    pub fn build(self) -> SymbolTable {
        SymbolTable {
            symbols: self.symbols,
        }
    }
}
