//! Comparison operator rewriting tests

mod common;
use common::{assert_parameterized, f, i, s};
use paramsql::{Error, parameterize};

#[test]
fn test_equals_integer() {
    assert_parameterized(
        "SELECT * FROM orders WHERE order_id=5",
        "SELECT * FROM orders WHERE order_id=?",
        vec![i(5)],
    );
}

#[test]
fn test_equals_float() {
    assert_parameterized(
        "SELECT * FROM orders WHERE order_id=5.0",
        "SELECT * FROM orders WHERE order_id=?",
        vec![f(5.0)],
    );
}

#[test]
fn test_equals_string() {
    assert_parameterized(
        "SELECT * FROM orders WHERE order_id='abc'",
        "SELECT * FROM orders WHERE order_id=?",
        vec![s("abc")],
    );
}

#[test]
fn test_not_equals() {
    assert_parameterized(
        "SELECT * FROM orders WHERE order_id != 5",
        "SELECT * FROM orders WHERE order_id != ?",
        vec![i(5)],
    );
    assert_parameterized(
        "SELECT * FROM orders WHERE order_id != 5.0",
        "SELECT * FROM orders WHERE order_id != ?",
        vec![f(5.0)],
    );
    assert_parameterized(
        "SELECT * FROM orders WHERE order_id != 'abc'",
        "SELECT * FROM orders WHERE order_id != ?",
        vec![s("abc")],
    );
}

#[test]
fn test_greater_than() {
    assert_parameterized(
        "SELECT * FROM orders WHERE zzz > 5",
        "SELECT * FROM orders WHERE zzz > ?",
        vec![i(5)],
    );
    assert_parameterized(
        "SELECT * FROM orders WHERE zzz > 5.2",
        "SELECT * FROM orders WHERE zzz > ?",
        vec![f(5.2)],
    );
}

#[test]
fn test_greater_than_date_string() {
    assert_parameterized(
        "SELECT * FROM orders WHERE req_time > '12/01/2022 08:00:00'",
        "SELECT * FROM orders WHERE req_time > ?",
        vec![s("12/01/2022 08:00:00")],
    );
}

#[test]
fn test_greater_than_equals() {
    assert_parameterized(
        "SELECT * FROM orders WHERE zzz >= 5",
        "SELECT * FROM orders WHERE zzz >= ?",
        vec![i(5)],
    );
    assert_parameterized(
        "SELECT * FROM orders WHERE zzz >= 5.2",
        "SELECT * FROM orders WHERE zzz >= ?",
        vec![f(5.2)],
    );
    assert_parameterized(
        "SELECT * FROM orders WHERE req_time >= '12/01/2022 08:00:00'",
        "SELECT * FROM orders WHERE req_time >= ?",
        vec![s("12/01/2022 08:00:00")],
    );
}

#[test]
fn test_less_than() {
    assert_parameterized(
        "SELECT * FROM orders WHERE req_count < 5",
        "SELECT * FROM orders WHERE req_count < ?",
        vec![i(5)],
    );
    assert_parameterized(
        "SELECT * FROM orders WHERE req_count < 5.2",
        "SELECT * FROM orders WHERE req_count < ?",
        vec![f(5.2)],
    );
}

#[test]
fn test_less_than_equals() {
    assert_parameterized(
        "SELECT * FROM orders WHERE req_status <= 5",
        "SELECT * FROM orders WHERE req_status <= ?",
        vec![i(5)],
    );
    assert_parameterized(
        "SELECT * FROM orders WHERE req_status <= 5.5",
        "SELECT * FROM orders WHERE req_status <= ?",
        vec![f(5.5)],
    );
}

#[test]
fn test_negative_literal() {
    assert_parameterized(
        "SELECT * FROM t WHERE balance < -10",
        "SELECT * FROM t WHERE balance < ?",
        vec![i(-10)],
    );
}

#[test]
fn test_duplicate_literal_values_bind_positionally() {
    // The same literal text in two conditions must produce two distinct
    // placeholders, substituted at their own positions.
    assert_parameterized(
        "SELECT * FROM t WHERE a = 5 AND b = 5",
        "SELECT * FROM t WHERE a = ? AND b = ?",
        vec![i(5), i(5)],
    );
}

#[test]
fn test_integer_overflow_aborts_parse() {
    let result = parameterize("SELECT * FROM t WHERE a = 1 AND b = 99999999999999999999");
    assert_eq!(
        result,
        Err(Error::IntegerOverflow("99999999999999999999".into()))
    );
}
