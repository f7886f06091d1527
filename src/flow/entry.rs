//! Validated accessors over a single flow entry.
//!
//! Flow documents come from many authoring tools, so every field may be
//! missing or carry the wrong JSON type. Each accessor returns `None` or a
//! safe default instead of failing.

use serde_json::{Map, Value};
use std::borrow::Cow;

pub const ID_KEY: &str = "id";
pub const TYPE_KEY: &str = "type";
pub const NAME_KEY: &str = "name";
pub const LABEL_KEY: &str = "label";
pub const WIRES_KEY: &str = "wires";
pub const OUTPUTS_KEY: &str = "outputs";
pub const X_KEY: &str = "x";
pub const Y_KEY: &str = "y";
pub const Z_KEY: &str = "z";
pub const DISABLED_KEY: &str = "disabled";
pub const GROUP_KEY: &str = "g";

pub const NODES_KEY: &str = "nodes";
pub const CONFIGS_KEY: &str = "configs";
pub const SUBFLOWS_KEY: &str = "subflows";

/// The entry's `type`, when it is a string.
pub fn type_name(entry: &Map<String, Value>) -> Option<&str> {
    entry.get(TYPE_KEY).and_then(Value::as_str)
}

/// The entry's `id`, whatever JSON type it has.
pub fn id(entry: &Map<String, Value>) -> Option<&Value> {
    entry.get(ID_KEY)
}

/// Text shown for the entry: `name`, then `label`, then its type.
///
/// Empty or falsy values (`""`, `0`, `false`, `null`, `[]`, `{}`) count as
/// absent. Other non-string values are rendered as compact JSON.
pub fn display_name<'a>(entry: &'a Map<String, Value>, type_name: &'a str) -> Cow<'a, str> {
    [NAME_KEY, LABEL_KEY]
        .iter()
        .filter_map(|key| entry.get(*key))
        .find_map(display_text)
        .unwrap_or(Cow::Borrowed(type_name))
}

fn display_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(text) if !text.is_empty() => Some(Cow::Borrowed(text.as_str())),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(Cow::Owned(n.to_string())),
        Value::Bool(true) => Some(Cow::Borrowed("true")),
        Value::Array(items) if !items.is_empty() => Some(Cow::Owned(value.to_string())),
        Value::Object(fields) if !fields.is_empty() => Some(Cow::Owned(value.to_string())),
        _ => None,
    }
}

/// The per-output edge lists, when `wires` is an array.
pub fn wires(entry: &Map<String, Value>) -> Option<&Vec<Value>> {
    entry.get(WIRES_KEY).and_then(Value::as_array)
}

/// Number of output ports implied by `wires`; at least one.
pub fn output_count(entry: &Map<String, Value>) -> usize {
    match wires(entry) {
        Some(ports) if !ports.is_empty() => ports.len(),
        _ => 1,
    }
}

/// Layout position, each coordinate defaulting to `0` on its own when it is
/// missing or not a number.
pub fn coordinates(entry: &Map<String, Value>) -> (Value, Value) {
    let coordinate = |key: &str| match entry.get(key) {
        Some(value @ Value::Number(_)) => value.clone(),
        _ => Value::from(0),
    };
    (coordinate(X_KEY), coordinate(Y_KEY))
}

/// True only when `disabled` is the boolean `true`.
pub fn is_disabled(entry: &Map<String, Value>) -> bool {
    matches!(entry.get(DISABLED_KEY), Some(Value::Bool(true)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn display_name_prefers_name_then_label() {
        let entry = object(json!({ "name": "A", "label": "B" }));
        assert_eq!(display_name(&entry, "t"), "A");

        let entry = object(json!({ "name": "", "label": "B" }));
        assert_eq!(display_name(&entry, "t"), "B");

        let entry = object(json!({ "name": null, "label": "" }));
        assert_eq!(display_name(&entry, "t"), "t");
    }

    #[test]
    fn display_name_renders_non_string_values() {
        let entry = object(json!({ "name": 5, "label": "L" }));
        assert_eq!(display_name(&entry, "c"), "5");

        let entry = object(json!({ "name": 0, "label": 2.5 }));
        assert_eq!(display_name(&entry, "c"), "2.5");

        let entry = object(json!({ "name": false, "label": true }));
        assert_eq!(display_name(&entry, "c"), "true");

        let entry = object(json!({ "name": [], "label": {} }));
        assert_eq!(display_name(&entry, "c"), "c");
    }

    #[test]
    fn output_count_follows_wires() {
        assert_eq!(output_count(&object(json!({ "wires": [[], ["a"], []] }))), 3);
        assert_eq!(output_count(&object(json!({ "wires": [] }))), 1);
        assert_eq!(output_count(&object(json!({ "wires": "a" }))), 1);
        assert_eq!(output_count(&object(json!({}))), 1);
    }

    #[test]
    fn coordinates_default_independently() {
        let entry = object(json!({ "x": 12.5, "y": "oops" }));
        assert_eq!(coordinates(&entry), (json!(12.5), json!(0)));

        let entry = object(json!({ "y": 40 }));
        assert_eq!(coordinates(&entry), (json!(0), json!(40)));
    }

    #[test]
    fn disabled_requires_boolean_true() {
        assert!(is_disabled(&object(json!({ "disabled": true }))));
        assert!(!is_disabled(&object(json!({ "disabled": "true" }))));
        assert!(!is_disabled(&object(json!({ "disabled": 1 }))));
    }
}
