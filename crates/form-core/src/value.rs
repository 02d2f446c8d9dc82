//! Attribute value classification

use serde_json::Value;

/// Check whether an attribute value counts as provided
///
/// Null, `false`, zero, the empty string, and empty containers are all
/// treated as "not provided" and skipped by validation.
pub(crate) fn is_provided(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().unwrap_or(0.0) != 0.0,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Whole or fractional numbers qualify; booleans and strings do not
pub(crate) fn is_numeric(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

/// Whole numbers only
///
/// A fractional literal such as `10.5` fails, as does `10.0`: a value
/// that arrives as a float is not a whole number even when its
/// fractional part is zero.
pub(crate) fn is_whole_number(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_i64() || n.is_u64(),
        _ => false,
    }
}
