//! Value coercions for hand-authored JSON, where `12`, `"12"` and `"12px"`
//! all mean the same thing.

use reportcard_style::parsers::{parse_length, run_parser};
use serde_json::Value;

/// A number, or a string holding a length such as `"24"` or `"24px"`.
pub(crate) fn number(value: &Value) -> Option<f32> {
    match value {
        Value::Number(n) => n.as_f64().map(|f| f as f32),
        Value::String(s) => run_parser(parse_length, s).ok(),
        _ => None,
    }
    .filter(|f| f.is_finite())
}

/// A non-negative integer count; fractional values are truncated.
pub(crate) fn count(value: &Value) -> Option<usize> {
    number(value).map(|n| n.max(0.0) as usize)
}

pub(crate) fn string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub(crate) fn boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" | "" => Some(false),
            _ => None,
        },
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        _ => None,
    }
}

/// Every entry as a string; entries that are not scalars become empty.
pub(crate) fn string_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| items.iter().map(|v| string(v).unwrap_or_default()).collect())
        .unwrap_or_default()
}

/// Every entry as a number, or `None` if any entry is not numeric.
pub(crate) fn number_list(value: &Value) -> Option<Vec<f32>> {
    value.as_array()?.iter().map(number).collect()
}
