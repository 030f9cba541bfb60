//! Property access on `serde_json` objects with dotted paths, e.g. `date.last_changed`.
//!
//! A key that itself contains dots is preferred over descending into nested objects, so
//! `{"a.b": 1, "a": {"b": 2}}` yields `1` for `a.b`. Array elements are addressed by
//! their position, as in `items.0.name`.

use anyhow::{Context, Result};
use itertools::Itertools;
use serde_json::Value;

use crate::value::is_empty;
use crate::JaggedError;

pub(crate) static NULL: Value = Value::Null;

fn child<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    if let Some(found) = child(value, &path.join(".")) {
        return Some(found);
    }
    match path {
        [first, rest @ ..] if !rest.is_empty() => lookup(child(value, first)?, rest),
        _ => None,
    }
}

/// The value at `property`, treating an explicit null like a missing property.
pub fn get_property<'a>(obj: &'a Value, property: &str) -> Option<&'a Value> {
    if property.is_empty() {
        return None;
    }
    let path = property.split('.').collect_vec();
    lookup(obj, &path).filter(|v| !v.is_null())
}

/// The property exists and is not empty (see [`crate::value::is_empty`]).
pub fn has_property(obj: &Value, property: &str) -> bool {
    get_property(obj, property).map_or(false, |v| !is_empty(v))
}

pub fn has_any_property(obj: &Value, properties: &[&str]) -> bool {
    properties.iter().any(|p| has_property(obj, p))
}

/// At least one top level property is not empty.
pub fn has_valid_property(obj: &Value) -> bool {
    obj.as_object()
        .map_or(false, |map| map.values().any(|v| !is_empty(v)))
}

/// The property equals any of `alternatives`. With no alternatives, the property must be
/// an empty array. A missing property compares as null.
pub fn property_is(obj: &Value, property: &str, alternatives: &[Value]) -> bool {
    let value = get_property(obj, property).unwrap_or(&NULL);
    if alternatives.is_empty() {
        return value.as_array().map_or(false, Vec::is_empty);
    }
    alternatives.iter().any(|alt| alt == value)
}

/// Remove top level properties in place. A null is left alone.
pub fn remove_properties(obj: &mut Value, properties: &[&str]) -> Result<()> {
    match obj {
        Value::Null => Ok(()),
        Value::Object(map) => {
            for property in properties {
                map.remove(*property);
            }
            Ok(())
        }
        other => Err(JaggedError::NotAnObject)
            .with_context(|| format!("removing properties from {other}")),
    }
}
