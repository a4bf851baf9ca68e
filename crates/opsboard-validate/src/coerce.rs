//! Primitive coercions from untrusted JSON values.
//!
//! Each helper decides once whether a raw value is well-formed and otherwise
//! substitutes the caller's fallback. None of them ever fails.

use serde_json::{Map, Value};

use crate::warning::{SanitizeWarning, Warnings};

/// Returns the string when it has at least one non-whitespace character.
pub fn non_blank(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text.as_str()),
        _ => None,
    }
}

/// Non-blank strings pass through unchanged; anything else becomes `fallback`.
pub fn coerce_string(value: Option<&Value>, fallback: &str) -> String {
    non_blank(value).unwrap_or(fallback).to_string()
}

/// Finite numbers pass through; strings are never parsed.
pub fn coerce_number(value: Option<&Value>, fallback: f64) -> f64 {
    match value {
        Some(Value::Number(number)) => number
            .as_f64()
            .filter(|parsed| parsed.is_finite())
            .unwrap_or(fallback),
        _ => fallback,
    }
}

pub fn as_object(value: Option<&Value>) -> Option<&Map<String, Value>> {
    value.and_then(Value::as_object)
}

/// Keeps at most `limit` leading entries of an array value.
///
/// A non-array is treated as empty without a warning.
pub fn limit_array<'a>(
    value: Option<&'a Value>,
    limit: usize,
    path: &str,
    warnings: &mut Warnings,
) -> &'a [Value] {
    let Some(items) = value.and_then(Value::as_array) else {
        return &[];
    };
    if items.len() > limit {
        warnings.push(SanitizeWarning::Truncated {
            path: path.to_string(),
            limit,
            dropped: items.len() - limit,
        });
    }
    &items[..items.len().min(limit)]
}

/// Emits one warning listing every key outside `allowed`, in encounter order.
pub fn warn_unknown_fields(
    object: &Map<String, Value>,
    allowed: &[&str],
    path: &str,
    warnings: &mut Warnings,
) {
    let unknown: Vec<String> = object
        .keys()
        .filter(|key| !allowed.contains(&key.as_str()))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        warnings.push(SanitizeWarning::UnknownFields {
            path: path.to_string(),
            fields: unknown,
        });
    }
}

/// Short name of a JSON value's type, for error and warning text.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
