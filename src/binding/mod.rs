//! Positional parameter binding
//!
//! Boundary between the parameterizer and an external prepared-statement
//! API. The sink prepares the rewritten statement once, then receives
//! one typed bind per parameter at ascending 1-based indices.

use crate::error::Result;
use crate::types::{ParsedQuery, Value};
use tracing::debug;

/// A prepared-statement-style execution sink.
///
/// Implementations translate `prepare` and the typed bind calls onto a
/// real driver. Bind failures should surface as [`crate::Error::Binding`]
/// with the offending 1-based index; they are never retried here, since
/// binding against a live statement handle is not idempotent in general.
pub trait StatementSink {
    /// Driver-side handle for a prepared statement
    type Handle;

    /// Prepare the rewritten statement text, returning a handle
    fn prepare(&mut self, sql: &str) -> Result<Self::Handle>;

    /// Bind a string parameter at a 1-based index
    fn bind_str(&mut self, handle: &mut Self::Handle, index: usize, value: &str) -> Result<()>;

    /// Bind a 64-bit integer parameter at a 1-based index
    fn bind_i64(&mut self, handle: &mut Self::Handle, index: usize, value: i64) -> Result<()>;

    /// Bind a 64-bit float parameter at a 1-based index
    fn bind_f64(&mut self, handle: &mut Self::Handle, index: usize, value: f64) -> Result<()>;

    /// Bind any value at a 1-based index, dispatching on its tag.
    ///
    /// Sinks whose driver has a generic set-by-inferred-type operation
    /// can override this with a single call.
    fn bind_value(&mut self, handle: &mut Self::Handle, index: usize, value: &Value) -> Result<()> {
        match value {
            Value::Str(s) => self.bind_str(handle, index, s),
            Value::I64(v) => self.bind_i64(handle, index, *v),
            Value::F64(v) => self.bind_f64(handle, index, *v),
        }
    }
}

/// Prepare `query` on `sink` and bind every parameter in placeholder order.
///
/// Calls `prepare` exactly once, then dispatches one typed bind per
/// parameter at indices `1..=n`. Errors from the sink propagate directly.
pub fn bind_statement<S: StatementSink>(sink: &mut S, query: &ParsedQuery) -> Result<S::Handle> {
    debug!(params = query.params.len(), "preparing statement");
    let mut handle = sink.prepare(&query.statement)?;

    for (i, param) in query.params.iter().enumerate() {
        sink.bind_value(&mut handle, i + 1, param)?;
    }

    Ok(handle)
}
