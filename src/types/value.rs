//! Typed bind-parameter values
//!
//! The set of literal shapes the parameterizer produces is closed by
//! design: strings, 64-bit signed integers, and 64-bit floats. Equality
//! is value-based so parameter lists compare directly in tests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A literal value lifted out of statement text, ready for positional binding
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// String parameter, surrounding quotes already stripped
    Str(String),
    /// 64-bit signed integer parameter
    I64(i64),
    /// 64-bit float parameter
    F64(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "'{}'", s),
            Value::I64(i) => write!(f, "{}", i),
            Value::F64(v) => write!(f, "{}", v),
        }
    }
}

// Implement Debug by hand to keep test output compact
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "Str({:?})", s),
            Value::I64(i) => write!(f, "I64({})", i),
            Value::F64(v) => write!(f, "F64({})", v),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::I64(i)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_quotes_strings_only() {
        assert_eq!(Value::Str("abc".into()).to_string(), "'abc'");
        assert_eq!(Value::I64(-5).to_string(), "-5");
        assert_eq!(Value::F64(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_debug_is_compact() {
        assert_eq!(format!("{:?}", Value::Str("a".into())), "Str(\"a\")");
        assert_eq!(format!("{:?}", Value::I64(7)), "I64(7)");
        assert_eq!(format!("{:?}", Value::F64(1.5)), "F64(1.5)");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from("abc"), Value::Str("abc".into()));
        assert_eq!(Value::from(String::from("abc")), Value::Str("abc".into()));
        assert_eq!(Value::from(5_i64), Value::I64(5));
        assert_eq!(Value::from(2.5_f64), Value::F64(2.5));
    }
}
