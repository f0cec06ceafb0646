//! Common test utilities for parameterizer integration tests
#![allow(dead_code)]

use paramsql::{ParsedQuery, Value, parameterize};

/// Parse `sql` and assert the rewritten statement and parameter list.
pub fn assert_parameterized(sql: &str, expected_statement: &str, expected_params: Vec<Value>) {
    let parsed = parameterize(sql).expect("parse failed");
    assert_eq!(parsed.statement, expected_statement, "statement mismatch");
    assert_eq!(parsed.params, expected_params, "parameter mismatch");
    assert_placeholder_invariant(&parsed);
}

/// Parse `sql` and assert it passes through untouched.
pub fn assert_untouched(sql: &str) {
    let parsed = parameterize(sql).expect("parse failed");
    assert_eq!(parsed.statement, sql);
    assert!(parsed.params.is_empty());
}

/// Placeholder count must always equal the parameter count.
pub fn assert_placeholder_invariant(parsed: &ParsedQuery) {
    assert_eq!(
        parsed.statement.matches('?').count(),
        parsed.params.len(),
        "placeholder/parameter count invariant violated"
    );
}

/// Re-parse a rewritten statement and assert no new matches appear.
pub fn assert_idempotent(parsed: &ParsedQuery) {
    let again = parameterize(&parsed.statement).expect("re-parse failed");
    assert_eq!(again.statement, parsed.statement);
    assert!(again.params.is_empty(), "re-parse produced new parameters");
}

pub fn s(v: &str) -> Value {
    Value::from(v)
}

pub fn i(v: i64) -> Value {
    Value::from(v)
}

pub fn f(v: f64) -> Value {
    Value::from(v)
}
