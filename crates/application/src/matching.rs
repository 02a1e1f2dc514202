//! JSON partial matching
//!
//! The asymmetric structural-subset relation used by the body validator:
//! the *expected* value must be a subset of the *actual* value. Objects
//! match keywise (extra actual keys are ignored), arrays match
//! existentially (each expected element must match some actual element,
//! order-free), scalars match by canonical text.

use serde_json::Value;

/// Options controlling scalar comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchOptions {
    /// Compare string scalars case-insensitively. Off by default; the
    /// default contract is case-sensitive.
    pub case_insensitive_strings: bool,
}

impl MatchOptions {
    /// Case-sensitive matching (the default contract).
    #[must_use]
    pub const fn case_sensitive() -> Self {
        Self {
            case_insensitive_strings: false,
        }
    }

    /// Case-insensitive string matching.
    #[must_use]
    pub const fn case_insensitive() -> Self {
        Self {
            case_insensitive_strings: true,
        }
    }
}

/// Returns true if `expected` is a structural subset of `actual`, with
/// default (case-sensitive) options.
#[must_use]
pub fn matches(expected: &Value, actual: &Value) -> bool {
    matches_with(expected, actual, MatchOptions::default())
}

/// Returns true if `expected` is a structural subset of `actual`.
///
/// The relation is not symmetric: extra keys and elements in `actual` are
/// ignored, while everything in `expected` must be accounted for.
#[must_use]
pub fn matches_with(expected: &Value, actual: &Value, options: MatchOptions) -> bool {
    match (expected, actual) {
        (Value::Object(expected_map), Value::Object(actual_map)) => {
            // Empty expected object matches any actual object.
            expected_map.iter().all(|(key, expected_value)| {
                actual_map
                    .get(key)
                    .is_some_and(|actual_value| matches_with(expected_value, actual_value, options))
            })
        }
        (Value::Array(expected_items), Value::Array(actual_items)) => {
            // Existential subset: each expected element must match at
            // least one actual element, anywhere in the array.
            expected_items.iter().all(|expected_item| {
                actual_items
                    .iter()
                    .any(|actual_item| matches_with(expected_item, actual_item, options))
            })
        }
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a.to_string() == b.to_string(),
        (Value::String(a), Value::String(b)) => {
            if options.case_insensitive_strings {
                a.eq_ignore_ascii_case(b)
            } else {
                a == b
            }
        }
        // Differing kinds never match.
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_expected_object_matches_any_object() {
        assert!(matches(&json!({}), &json!({})));
        assert!(matches(&json!({}), &json!({"a": 1, "b": [2]})));
    }

    #[test]
    fn test_object_subset() {
        let expected = json!({"user": {"id": 1}});
        let actual = json!({"user": {"id": 1, "name": "Ann"}, "meta": {}});
        assert!(matches(&expected, &actual));
    }

    #[test]
    fn test_object_missing_key() {
        assert!(!matches(&json!({"id": 1}), &json!({"name": "Ann"})));
    }

    #[test]
    fn test_kind_mismatch() {
        assert!(!matches(&json!("1"), &json!(1)));
        assert!(!matches(&json!({"a": 1}), &json!([1])));
        assert!(!matches(&json!(null), &json!(false)));
    }

    #[test]
    fn test_array_existential_subset() {
        let expected = json!([{"id": 1}]);
        let actual = json!([{"id": 2}, {"id": 1, "extra": "x"}]);
        assert!(matches(&expected, &actual));
    }

    #[test]
    fn test_array_order_irrelevant() {
        assert!(matches(&json!([2, 1]), &json!([1, 2, 3])));
    }

    #[test]
    fn test_array_unmatched_element_fails() {
        assert!(!matches(&json!([4]), &json!([1, 2, 3])));
    }

    #[test]
    fn test_array_duplicates_may_share_a_match() {
        // Each duplicate independently requires a (possibly shared) match.
        assert!(matches(&json!([1, 1]), &json!([1])));
    }

    #[test]
    fn test_empty_expected_array_matches_any_array() {
        assert!(matches(&json!([]), &json!([1, 2])));
    }

    #[test]
    fn test_scalar_number_textual() {
        assert!(matches(&json!(5), &json!(5)));
        assert!(!matches(&json!(5), &json!(6)));
        // "1" vs "1.0" differ textually
        assert!(!matches(&json!(1), &json!(1.0)));
    }

    #[test]
    fn test_string_case_sensitive_by_default() {
        assert!(matches(&json!("Ann"), &json!("Ann")));
        assert!(!matches(&json!("ann"), &json!("Ann")));
    }

    #[test]
    fn test_string_case_insensitive_option() {
        assert!(matches_with(
            &json!("ann"),
            &json!("Ann"),
            MatchOptions::case_insensitive()
        ));
    }

    #[test]
    fn test_nested_recursion() {
        let expected = json!({"data": {"items": [{"tags": ["a"]}]}});
        let actual = json!({
            "data": {
                "items": [
                    {"tags": ["x", "y"]},
                    {"tags": ["b", "a"], "id": 7}
                ],
                "count": 2
            }
        });
        assert!(matches(&expected, &actual));
    }

    #[test]
    fn test_not_symmetric() {
        let smaller = json!({"a": 1});
        let larger = json!({"a": 1, "b": 2});
        assert!(matches(&smaller, &larger));
        assert!(!matches(&larger, &smaller));
    }
}
