//! Rules for reading fields out of loosely-typed JSON request bodies.
//!
//! Request bodies are accepted as JSON objects. A field counts as "provided"
//! only when its value is truthy; text columns accept strings and numbers.

use serde_json::{Map, Value};

use crate::error::CoreError;

/// JSON truthiness: `null`, `false`, zero, and empty strings, arrays, or
/// objects are falsy. Everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Read `field` as text if it is present and truthy.
///
/// Returns `Ok(None)` for missing or falsy values. Numbers are rendered in
/// decimal so `"age": 50` yields `"50"`. Booleans, arrays, and objects cannot
/// be stored in a text column and fail validation.
pub fn optional_text(body: &Map<String, Value>, field: &str) -> Result<Option<String>, CoreError> {
    match body.get(field) {
        Some(v) if is_truthy(v) => match v {
            Value::String(s) => Ok(Some(s.clone())),
            Value::Number(n) => Ok(Some(n.to_string())),
            _ => Err(CoreError::Validation(format!(
                "{field} must be a string or number"
            ))),
        },
        _ => Ok(None),
    }
}

/// Like [`optional_text`], but a missing or falsy value is a validation error.
pub fn required_text(body: &Map<String, Value>, field: &str) -> Result<String, CoreError> {
    optional_text(body, field)?
        .ok_or_else(|| CoreError::Validation(format!("{field} is required")))
}
