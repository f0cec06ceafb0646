//! Parameterized query output

use super::value::Value;
use serde::{Deserialize, Serialize};

/// A rewritten statement paired with its ordered bind parameters.
///
/// Invariant: the number of `?` placeholders in `statement` equals
/// `params.len()`, and `params[i]` belongs to the i-th placeholder in
/// left-to-right order. Produced once per parse and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuery {
    /// Statement text with literal values replaced by `?` placeholders
    pub statement: String,
    /// Bind parameters in placeholder order
    pub params: Vec<Value>,
}

impl ParsedQuery {
    /// Number of bind parameters (equals the placeholder count)
    pub fn param_count(&self) -> usize {
        self.params.len()
    }
}
