//! Emptiness tests on `serde_json` values.

use serde_json::Value;

/// Null, the empty string, an empty array or an empty object.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

pub fn is_null(value: Option<&Value>) -> bool {
    value.map_or(true, Value::is_null)
}

pub fn is_primitive(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

pub fn is_empty_array(value: &Value) -> bool {
    value.as_array().map_or(false, Vec::is_empty)
}

pub fn is_empty_object(value: &Value) -> bool {
    value.as_object().map_or(false, |map| map.is_empty())
}
