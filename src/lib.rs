//! Literal-to-placeholder rewriting for SQL statements
//!
//! Statements assembled with interpolated literal values can still be
//! executed safely: the parser scans WHERE/SET conditions for a fixed
//! set of shapes (`=`, `<`, `>`, `>=`, `<=`, `!=`, `IN`, `BETWEEN`),
//! replaces each literal with a positional `?` placeholder, and collects
//! the literals into an ordered, typed parameter list for binding.
//! Everything outside a recognized condition passes through
//! byte-for-byte, so this works as a best-effort safety net over any
//! statement text rather than a full SQL validator.
//!
//! ```
//! use paramsql::{Value, parameterize};
//!
//! let parsed = parameterize("SELECT * FROM orders WHERE order_id=5").unwrap();
//! assert_eq!(parsed.statement, "SELECT * FROM orders WHERE order_id=?");
//! assert_eq!(parsed.params, vec![Value::I64(5)]);
//! ```

mod binding;
mod coercion;
mod error;
mod parsing;
mod types;

pub use binding::{StatementSink, bind_statement};
pub use coercion::coerce_literal;
pub use error::{Error, Result};
pub use parsing::{CachingParser, parameterize};
pub use types::{ParsedQuery, Value};
