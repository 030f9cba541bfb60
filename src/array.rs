//! List helpers.

use std::collections::HashSet;
use std::hash::Hash;

use serde_json::Value;

use crate::matrix::resolve_index;
use crate::string::compare_case_insensitive;
use crate::value::is_empty;

/// First occurrence of every distinct item, in order.
pub fn remove_duplicates<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    items.iter().fold(Vec::new(), |mut kept, item| {
        if !kept.contains(item) {
            kept.push(item.clone());
        }
        kept
    })
}

/// Keeps the first item for each distinct key. Items without a key are always kept.
pub fn remove_duplicates_by<T, K>(items: &[T], key: impl Fn(&T) -> Option<K>) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
{
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| match key(item) {
            Some(k) => seen.insert(k),
            None => true,
        })
        .cloned()
        .collect()
}

/// Drops null, `""`, `[]` and `{}`.
pub fn remove_empty(values: &[Value]) -> Vec<Value> {
    values.iter().filter(|v| !is_empty(v)).cloned().collect()
}

pub fn remove_duplicates_and_empty(values: &[Value]) -> Vec<Value> {
    remove_empty(&remove_duplicates(values))
}

/// The first and last item; just the one for a single item list.
pub fn outer_elements<T: Clone>(items: &[T]) -> Vec<T> {
    match items {
        [] => vec![],
        [only] => vec![only.clone()],
        [first, .., last] => vec![first.clone(), last.clone()],
    }
}

pub fn includes_case_insensitive(items: &[impl AsRef<str>], search: &str) -> bool {
    items
        .iter()
        .any(|item| compare_case_insensitive(item.as_ref(), search))
}

/// Rotate left by `by` places; a negative `by` rotates right. Shifts longer than the list
/// wrap around.
pub fn shift<T: Clone>(items: &[T], by: isize) -> Vec<T> {
    let len = items.len();
    if len == 0 {
        return vec![];
    }

    let by = if by.unsigned_abs() > len {
        by % len as isize
    } else {
        by
    };
    let at = resolve_index(len, by).unwrap_or(0).min(len);
    items[at..].iter().chain(&items[..at]).cloned().collect()
}

/// The item with the largest key; the earliest one wins a tie.
pub fn find_max_by_key<T, K: PartialOrd>(items: &[T], key: impl Fn(&T) -> K) -> Option<&T> {
    items.iter().reduce(|best, item| {
        if key(item) > key(best) {
            item
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn duplicates() {
        assert_eq!(remove_duplicates(&[1, 2, 1, 3, 2]), vec![1, 2, 3]);
        assert_eq!(remove_duplicates::<u8>(&[]), Vec::<u8>::new());
    }

    #[test]
    fn duplicates_by_key() {
        let items = [
            json!({"id": 1, "n": "a"}),
            json!({"id": 2, "n": "b"}),
            json!({"n": "c"}),
            json!({"id": 1, "n": "d"}),
            json!({"n": "e"}),
        ];
        let kept = remove_duplicates_by(&items, |v| v.get("id").and_then(Value::as_i64));
        let names = kept.iter().map(|v| v["n"].as_str().unwrap()).collect::<Vec<_>>();
        assert_eq!(names, ["a", "b", "c", "e"]);
    }

    #[test]
    fn empties() {
        let values = [json!(1), json!(null), json!(""), json!([]), json!({}), json!(1), json!("x")];
        assert_eq!(remove_empty(&values).len(), 3);
        assert_eq!(remove_duplicates_and_empty(&values), vec![json!(1), json!("x")]);
    }

    #[test]
    fn outer() {
        assert_eq!(outer_elements::<i32>(&[]), Vec::<i32>::new());
        assert_eq!(outer_elements(&[1]), vec![1]);
        assert_eq!(outer_elements(&[1, 2, 3]), vec![1, 3]);
    }

    #[test]
    fn case_insensitive() {
        assert!(includes_case_insensitive(&["Foo", "bar"], "FOO"));
        assert!(!includes_case_insensitive(&["Foo", "bar"], "baz"));
    }

    #[test]
    fn shifting() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(shift(&items, 2), vec![3, 4, 5, 1, 2]);
        assert_eq!(shift(&items, -1), vec![5, 1, 2, 3, 4]);
        assert_eq!(shift(&items, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(shift(&items, 7), vec![3, 4, 5, 1, 2]);
        assert_eq!(shift(&items, -7), vec![4, 5, 1, 2, 3]);
        assert_eq!(shift::<i32>(&[], 3), Vec::<i32>::new());
    }

    #[test]
    fn max_by_key() {
        let items = [("a", 1), ("b", 3), ("c", 3), ("d", 2)];
        assert_eq!(find_max_by_key(&items, |i| i.1), Some(&("b", 3)));
        assert_eq!(find_max_by_key(&[] as &[(u8, u8)], |i| i.1), None);
    }
}
