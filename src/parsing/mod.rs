//! Condition recognition and rewriting
//!
//! The pipeline is a single linear pass: scan the statement text for
//! recognized condition shapes, coerce each literal, and rewrite the
//! text with placeholders at the recorded positions.

pub mod caching_parser;
mod matcher;
mod rewriter;

pub use caching_parser::CachingParser;

use crate::error::Result;
use crate::types::ParsedQuery;

/// Rewrite literal-valued conditions in `sql` into placeholder form.
///
/// Text that matches no recognized condition shape passes through
/// unchanged; a statement with no conditions at all comes back as-is
/// with an empty parameter list.
pub fn parameterize(sql: &str) -> Result<ParsedQuery> {
    let matches = matcher::scan(sql);
    rewriter::rewrite(sql, &matches)
}
