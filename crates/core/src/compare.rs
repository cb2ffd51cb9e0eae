//! Order-independent comparison of key/value collections.

use std::borrow::Cow;
use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Number, Value};

/// Returns true when `a` and `b` hold the same key/value pairs, in any order.
///
/// Both inputs must be containers: objects are keyed by name, arrays by
/// index. Anything else yields `false`. Scalars compare loosely by their text
/// form, so `1`, `1.0`, `"1"` and `true` match each other, as do `""`,
/// `false` and `null`. Nested containers compare structurally.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use webfuncs_core::compare::arrays_equal_unordered;
///
/// assert!(arrays_equal_unordered(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1})));
/// assert!(!arrays_equal_unordered(&json!({"a": 1}), &json!({"a": 2})));
/// ```
#[must_use]
pub fn arrays_equal_unordered(a: &Value, b: &Value) -> bool {
    let (Some(left), Some(right)) = (entries(a), entries(b)) else {
        return false;
    };

    is_subset(&left, &right) && is_subset(&right, &left)
}

fn entries(value: &Value) -> Option<HashMap<Cow<'_, str>, &Value>> {
    match value {
        Value::Object(map) => Some(
            map.iter()
                .map(|(k, v)| (Cow::Borrowed(k.as_str()), v))
                .collect(),
        ),
        Value::Array(items) => Some(
            items
                .iter()
                .enumerate()
                .map(|(i, v)| (Cow::Owned(i.to_string()), v))
                .collect(),
        ),
        _ => None,
    }
}

fn is_subset<'a>(
    left: &HashMap<Cow<'a, str>, &'a Value>,
    right: &HashMap<Cow<'a, str>, &'a Value>,
) -> bool {
    left.iter().all(|(key, value)| {
        right
            .get(key)
            .is_some_and(|other| loosely_equal(value, other))
    })
}

fn loosely_equal(a: &Value, b: &Value) -> bool {
    match (scalar_text(a), scalar_text(b)) {
        (Some(x), Some(y)) => x == y,
        (None, None) => a == b,
        _ => false,
    }
}

fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null | Value::Bool(false) => Some(Cow::Borrowed("")),
        Value::Bool(true) => Some(Cow::Borrowed("1")),
        Value::Number(n) => Some(Cow::Owned(number_text(n))),
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Number text without trailing fractional zeros, so `1.0` reads as `1`.
fn number_text(n: &Number) -> String {
    let raw = n.to_string();
    Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .map_or(raw, |d| d.normalize().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({"a": 1, "b": 2}), json!({"b": 2, "a": 1}))]
    #[case(json!({}), json!({}))]
    #[case(json!([]), json!({}))]
    #[case(json!([1, 2, 3]), json!({"0": 1, "1": 2, "2": 3}))]
    #[case(json!({"a": 1}), json!({"a": "1"}))]
    #[case(json!({"a": true}), json!({"a": 1}))]
    #[case(json!({"a": 1.0}), json!({"a": 1}))]
    #[case(json!({"a": 2.50}), json!({"a": "2.5"}))]
    #[case(json!([0.0]), json!(["0"]))]
    #[case(json!({"a": null}), json!({"a": false}))]
    #[case(json!({"a": {"x": [1, 2]}}), json!({"a": {"x": [1, 2]}}))]
    fn test_equal(#[case] a: Value, #[case] b: Value) {
        assert!(arrays_equal_unordered(&a, &b));
        assert!(arrays_equal_unordered(&b, &a));
    }

    #[rstest]
    #[case(json!({"a": 1}), json!({"a": 2}))]
    #[case(json!({"a": 1}), json!({"a": 1, "b": 2}))]
    #[case(json!({"a": 1}), json!({"b": 1}))]
    #[case(json!([1, 2]), json!([2, 1]))]
    #[case(json!({"a": {"x": 1}}), json!({"a": {"x": 2}}))]
    #[case(json!({"a": [1]}), json!({"a": "1"}))]
    #[case(json!({"a": 1}), json!({"a": "1.0"}))]
    fn test_not_equal(#[case] a: Value, #[case] b: Value) {
        assert!(!arrays_equal_unordered(&a, &b));
        assert!(!arrays_equal_unordered(&b, &a));
    }

    #[rstest]
    #[case(json!(1), json!(1))]
    #[case(json!("a"), json!({"0": "a"}))]
    #[case(json!(null), json!([]))]
    #[case(json!({}), json!(true))]
    fn test_non_containers_are_never_equal(#[case] a: Value, #[case] b: Value) {
        assert!(!arrays_equal_unordered(&a, &b));
    }
}
