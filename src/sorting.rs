//! Comparators for sorting lists of `serde_json` values, mostly objects sorted by one or
//! more of their properties.
//!
//! ```
//! use jagged::sorting::{chained, SortKey};
//! use serde_json::json;
//!
//! let mut rows = vec![
//!     json!({"confidence": 1, "verified": false}),
//!     json!({"confidence": 2, "verified": false}),
//!     json!({"confidence": 2, "verified": true}),
//! ];
//! let keys = vec![
//!     SortKey::Descending("confidence".into()),
//!     SortKey::Matching("verified".into(), json!(true)),
//! ];
//! rows.sort_by(chained(keys));
//! assert_eq!(rows[0], json!({"confidence": 2, "verified": true}));
//! ```

use std::cmp::Ordering;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use ordered_float::OrderedFloat;
use serde_json::Value;

use crate::object::{get_property, NULL};
use crate::JaggedError;

pub type Comparator = Box<dyn Fn(&Value, &Value) -> Ordering>;

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn compare_present(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => OrderedFloat(x).cmp(&OrderedFloat(y)),
            _ => Ordering::Equal,
        },
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (a, b) => as_text(a).cmp(&as_text(b)),
    }
}

/// Numbers numerically, strings lexically, anything else by its text. Nulls go last.
pub fn dynamic_compare(a: &Value, b: &Value) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => compare_present(a, b),
    }
}

/// The reverse of [`dynamic_compare`], nulls first.
pub fn dynamic_compare_descending(a: &Value, b: &Value) -> Ordering {
    dynamic_compare(a, b).reverse()
}

/// Objects whose `key` equals `value` sort first (last when `descending`). Everything
/// else compares equal.
pub fn by_value(key: &str, value: Value, descending: bool) -> impl Fn(&Value, &Value) -> Ordering {
    let key = key.to_string();
    move |a, b| {
        let matches = |v: &Value| get_property(v, &key).map_or(value.is_null(), |p| *p == value);
        let ordering = matches(b).cmp(&matches(a));
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

/// Values in the order they appear in `order`; values not listed go last.
pub fn by_values(order: Vec<Value>) -> impl Fn(&Value, &Value) -> Ordering {
    move |a, b| {
        let rank = |v: &Value| order.iter().position(|o| o == v).unwrap_or(order.len());
        rank(a).cmp(&rank(b))
    }
}

fn by_property(property: String, descending: bool) -> Comparator {
    Box::new(move |a, b| {
        let a = get_property(a, &property).unwrap_or(&NULL);
        let b = get_property(b, &property).unwrap_or(&NULL);
        if descending {
            dynamic_compare_descending(a, b)
        } else {
            dynamic_compare(a, b)
        }
    })
}

/// One step of a [`chained`] sort.
pub enum SortKey {
    /// Ascending by a property; written `"name"`.
    Ascending(String),
    /// Descending by a property; written `"-name"`.
    Descending(String),
    /// Objects with this property value first; written `["name", value]`.
    Matching(String, Value),
    Custom(Comparator),
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let property = s.strip_prefix('-').unwrap_or(s);
        if property.is_empty() {
            return Err(JaggedError::InvalidSortKey(s.to_string()))
                .context("a sort key needs a property name");
        }
        Ok(if s.starts_with('-') {
            SortKey::Descending(property.to_string())
        } else {
            SortKey::Ascending(property.to_string())
        })
    }
}

impl SortKey {
    /// A key from its JSON form: a string, or a `[property, value]` pair.
    pub fn from_json(definition: &Value) -> Result<Self> {
        match definition {
            Value::String(s) => s.parse(),
            Value::Array(pair) => match pair.as_slice() {
                [Value::String(property), value] => {
                    Ok(SortKey::Matching(property.clone(), value.clone()))
                }
                _ => Err(JaggedError::InvalidSortKey(definition.to_string()))
                    .context("expected a [property, value] pair"),
            },
            other => Err(JaggedError::InvalidSortKey(other.to_string()))
                .with_context(|| anyhow!("sort keys are strings or pairs")),
        }
    }

    fn into_comparator(self) -> Comparator {
        match self {
            SortKey::Ascending(property) => by_property(property, false),
            SortKey::Descending(property) => by_property(property, true),
            SortKey::Matching(property, value) => Box::new(by_value(&property, value, false)),
            SortKey::Custom(f) => f,
        }
    }
}

/// Sort by each key in turn, moving to the next only on a tie.
pub fn chained(keys: Vec<SortKey>) -> impl Fn(&Value, &Value) -> Ordering {
    let comparators: Vec<Comparator> = keys.into_iter().map(SortKey::into_comparator).collect();
    move |a, b| {
        comparators
            .iter()
            .fold(Ordering::Equal, |ordering, cmp| ordering.then_with(|| cmp(a, b)))
    }
}
