//! Field-level before/after resolution.
//!
//! A field's value can live in the plain mapping, the parallel sensitive
//! mapping, or (for the after state) be unknown until apply. The precedence
//! is fixed: plain known value beats sensitive known value beats
//! unknown-after-apply beats null. Swapping that order would silently
//! mis-report sensitive-but-known fields as unknown.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::plan::ChangeRecord;

/// Rendered placeholder for a sensitive before value.
pub const SENSITIVE_VALUE: &str = "(sensitive value)";

/// Rendered placeholder for an after value unknown until apply.
pub const KNOWN_AFTER_APPLY: &str = "(known after apply)";

/// Resolved before state of a single field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBefore {
    /// The field's value; `Value::Null` when absent.
    pub value: Value,
    /// True when the value was sourced from the sensitive mapping.
    pub sensitive: bool,
}

/// Resolved after state of a single field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldAfter {
    /// The field's value; `Value::Null` when absent or unknown.
    pub value: Value,
    /// True when the value is not known until the plan is applied.
    pub known_after_apply: bool,
}

/// Returns the union of field names across all five value mappings,
/// lexicographically sorted so output order is stable across runs.
#[must_use]
pub fn all_field_names(change: &ChangeRecord) -> Vec<String> {
    let mut names: BTreeSet<&String> = BTreeSet::new();

    if let Some(map) = change.before.as_ref() {
        names.extend(map.keys());
    }
    if let Some(map) = change.after.as_ref() {
        names.extend(map.keys());
    }
    if let Some(map) = change.after_unknown.as_ref() {
        names.extend(map.keys());
    }
    if let Some(sensitive) = change.before_sensitive.as_ref() {
        names.extend(sensitive.keys());
    }
    if let Some(sensitive) = change.after_sensitive.as_ref() {
        names.extend(sensitive.keys());
    }

    names.into_iter().cloned().collect()
}

/// Resolves the before state of one field.
///
/// `before` may be absent entirely when the resource is being created; the
/// sensitive mapping only overrides when the plain mapping has no entry.
#[must_use]
pub fn field_before(change: &ChangeRecord, field: &str) -> FieldBefore {
    let plain = change
        .before
        .as_ref()
        .and_then(|map| map.get(field))
        .filter(|v| !v.is_null());

    if let Some(value) = plain {
        return FieldBefore {
            value: value.clone(),
            sensitive: false,
        };
    }

    let sensitive = change
        .before_sensitive
        .as_ref()
        .and_then(|sv| sv.get(field))
        .filter(|v| !v.is_null());

    if let Some(value) = sensitive {
        return FieldBefore {
            value: value.clone(),
            sensitive: true,
        };
    }

    FieldBefore {
        value: Value::Null,
        sensitive: false,
    }
}

/// Resolves the after state of one field.
///
/// Precedence: plain known value, then sensitive known value, then
/// unknown-after-apply, then null.
#[must_use]
pub fn field_after(change: &ChangeRecord, field: &str) -> FieldAfter {
    let plain = change
        .after
        .as_ref()
        .and_then(|map| map.get(field))
        .filter(|v| !v.is_null());

    if let Some(value) = plain {
        return FieldAfter {
            value: value.clone(),
            known_after_apply: false,
        };
    }

    let sensitive = change
        .after_sensitive
        .as_ref()
        .and_then(|sv| sv.get(field))
        .filter(|v| !v.is_null());

    if let Some(value) = sensitive {
        return FieldAfter {
            value: value.clone(),
            known_after_apply: false,
        };
    }

    let unknown = change.after_unknown.as_ref().and_then(|map| map.get(field));
    if is_truthy(unknown) {
        return FieldAfter {
            value: Value::Null,
            known_after_apply: true,
        };
    }

    FieldAfter {
        value: Value::Null,
        known_after_apply: false,
    }
}

/// Renders one field's before and after values as display text.
///
/// Sensitive before values render as `(sensitive value)`, unknown after
/// values as `(known after apply)`; everything else is canonical JSON text,
/// including `null` for an absent value. The unchanged classification
/// upstream compares these strings, not the raw values - two
/// differently-typed values that serialize identically count as unchanged.
/// That textual comparison is a deliberate simplification kept for output
/// compatibility.
#[must_use]
pub fn render_before_after(change: &ChangeRecord, field: &str) -> (String, String) {
    let before = field_before(change, field);
    let before_text = if before.sensitive {
        SENSITIVE_VALUE.to_string()
    } else {
        before.value.to_string()
    };

    let after = field_after(change, field);
    let after_text = if after.known_after_apply {
        KNOWN_AFTER_APPLY.to_string()
    } else {
        after.value.to_string()
    };

    (before_text, after_text)
}

/// A mapping entry counts as set when present and neither `null` nor `false`.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null | Value::Bool(false)) => false,
        Some(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn change(json: Value) -> ChangeRecord {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_all_field_names_union_sorted() {
        let change = change(json!({
            "actions": ["update"],
            "before": {"zone": "us-east-1", "ami": "a1"},
            "after": {"ami": "a2"},
            "before_sensitive": {"password": "x"},
            "after_sensitive": false,
            "after_unknown": {"arn": true}
        }));

        assert_eq!(
            all_field_names(&change),
            vec!["ami", "arn", "password", "zone"]
        );
    }

    #[test]
    fn test_all_field_names_empty_record() {
        let change = change(json!({"actions": ["create"]}));
        assert!(all_field_names(&change).is_empty());
    }

    #[test]
    fn test_field_before_plain_wins_over_sensitive() {
        let change = change(json!({
            "actions": ["update"],
            "before": {"token": "plain"},
            "before_sensitive": {"token": "masked"}
        }));

        let before = field_before(&change, "token");
        assert_eq!(before.value, json!("plain"));
        assert!(!before.sensitive);
    }

    #[test]
    fn test_field_before_sensitive_only() {
        let change = change(json!({
            "actions": ["update"],
            "before": {},
            "before_sensitive": {"password": "hunter2"}
        }));

        let before = field_before(&change, "password");
        assert_eq!(before.value, json!("hunter2"));
        assert!(before.sensitive);
    }

    #[test]
    fn test_field_before_null_counts_as_absent() {
        let change = change(json!({
            "actions": ["update"],
            "before": {"tags": null},
            "before_sensitive": {"tags": "masked"}
        }));

        // A null in the plain mapping falls through to the sensitive one.
        let before = field_before(&change, "tags");
        assert_eq!(before.value, json!("masked"));
        assert!(before.sensitive);
    }

    #[test]
    fn test_field_after_precedence() {
        let change = change(json!({
            "actions": ["update"],
            "after": {"ami": "a2"},
            "after_sensitive": {"ami": "masked", "password": "hunter2"},
            "after_unknown": {"ami": true, "password": true, "arn": true}
        }));

        // Plain beats sensitive beats unknown.
        let ami = field_after(&change, "ami");
        assert_eq!(ami.value, json!("a2"));
        assert!(!ami.known_after_apply);

        let password = field_after(&change, "password");
        assert_eq!(password.value, json!("hunter2"));
        assert!(!password.known_after_apply);

        let arn = field_after(&change, "arn");
        assert_eq!(arn.value, Value::Null);
        assert!(arn.known_after_apply);
    }

    #[test]
    fn test_field_after_unknown_false_is_not_unknown() {
        let change = change(json!({
            "actions": ["update"],
            "after_unknown": {"id": false}
        }));

        let after = field_after(&change, "id");
        assert!(!after.known_after_apply);
        assert_eq!(after.value, Value::Null);
    }

    #[test]
    fn test_render_sensitive_and_unknown_placeholders() {
        let change = change(json!({
            "actions": ["update"],
            "before_sensitive": {"password": "old"},
            "after_unknown": {"password": true}
        }));

        let (before_text, after_text) = render_before_after(&change, "password");
        assert_eq!(before_text, SENSITIVE_VALUE);
        assert_eq!(after_text, KNOWN_AFTER_APPLY);
    }

    #[test]
    fn test_render_absent_values_as_null() {
        let change = change(json!({"actions": ["create"], "after": {"name": "web"}}));

        let (before_text, after_text) = render_before_after(&change, "name");
        assert_eq!(before_text, "null");
        assert_eq!(after_text, "\"web\"");
    }

    #[test]
    fn test_render_canonical_json_text() {
        let change = change(json!({
            "actions": ["update"],
            "before": {"count": 2, "tags": {"env": "dev"}},
            "after": {"count": 3, "tags": {"env": "prod"}}
        }));

        assert_eq!(
            render_before_after(&change, "count"),
            ("2".to_string(), "3".to_string())
        );
        assert_eq!(
            render_before_after(&change, "tags"),
            (
                "{\"env\":\"dev\"}".to_string(),
                "{\"env\":\"prod\"}".to_string()
            )
        );
    }
}
