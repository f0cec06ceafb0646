//! Literal-token coercion
//!
//! Converts the raw text of one literal token into a typed [`Value`].

use crate::error::{Error, Result};
use crate::types::Value;

/// Coerce a literal token's raw text (quotes included, if any) into a value.
///
/// Single-quoted tokens become strings with exactly one quote stripped
/// from each end and no escape processing. Numeric-shaped tokens become
/// integers or floats. Anything else falls back to a string of the raw
/// token, so an unrecognized literal never hard-fails the parse.
pub fn coerce_literal(raw: &str) -> Result<Value> {
    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return Ok(Value::Str(raw[1..raw.len() - 1].to_string()));
    }

    if is_numeric_shape(raw) {
        if raw.contains('.') {
            let parsed = raw
                .parse::<f64>()
                .map_err(|_| Error::NumericParse(raw.to_string()))?;
            return Ok(Value::F64(parsed));
        }
        return match raw.parse::<i64>() {
            Ok(parsed) => Ok(Value::I64(parsed)),
            // The shape guard admits only digit runs, so the only
            // possible parse failure is range overflow.
            Err(_) => Err(Error::IntegerOverflow(raw.to_string())),
        };
    }

    Ok(Value::Str(raw.to_string()))
}

/// Matches `-?digits(.digits)?` with at least one digit on each side of
/// the point.
pub(crate) fn is_numeric_shape(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() {
        return false;
    }
    match digits.split_once('.') {
        Some((int_part, frac_part)) => {
            !int_part.is_empty()
                && !frac_part.is_empty()
                && int_part.bytes().all(|b| b.is_ascii_digit())
                && frac_part.bytes().all(|b| b.is_ascii_digit())
        }
        None => digits.bytes().all(|b| b.is_ascii_digit()),
    }
}
