use crate::flow::entry::{self, *};
use crate::registry::{EXISTING_PLACEHOLDER_TYPE, TypeRegistry};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

/// A node that was replaced by a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RewrittenNode {
    pub id: Value,
    pub original_type: String,
}

/// Replaces `value` with a placeholder node when its type is not in `known`.
///
/// Entries that are not objects, have no string `type`, have a known type, or
/// carry no `id` are left untouched. A replaced entry keeps its `id`, `z`,
/// wiring and position; every other field except `disabled: true` is dropped.
pub fn rewrite_if_unknown(value: &mut Value, known: &TypeRegistry) -> Option<RewrittenNode> {
    let node = value.as_object_mut()?;
    let original_type = entry::type_name(node)?;
    if known.contains(original_type) || entry::id(node).is_none() {
        return None;
    }
    let original_type = original_type.to_string();

    let original = std::mem::take(node);
    *node = placeholder_for(original, &original_type);

    let id = node.get(ID_KEY).cloned().unwrap_or(Value::Null);
    debug!(id = %id, original_type = %original_type, "Replaced unknown node with placeholder");
    Some(RewrittenNode { id, original_type })
}

/// Builds the placeholder record that stands in for `original`.
fn placeholder_for(mut original: Map<String, Value>, original_type: &str) -> Map<String, Value> {
    let name = format!(
        "{} ({})",
        entry::display_name(&original, original_type),
        original_type
    );
    let outputs = entry::output_count(&original);
    let (x, y) = entry::coordinates(&original);
    let disabled = entry::is_disabled(&original);
    let wires = match original.remove(WIRES_KEY) {
        Some(wires @ Value::Array(_)) => wires,
        _ => Value::Array(Vec::new()),
    };

    let mut replacement = Map::new();
    if let Some(id) = original.remove(ID_KEY) {
        replacement.insert(ID_KEY.to_string(), id);
    }
    replacement.insert(TYPE_KEY.to_string(), Value::from(EXISTING_PLACEHOLDER_TYPE));
    replacement.insert(NAME_KEY.to_string(), Value::from(name));
    replacement.insert(OUTPUTS_KEY.to_string(), Value::from(outputs));
    if let Some(z) = original.remove(Z_KEY) {
        replacement.insert(Z_KEY.to_string(), z);
    }
    replacement.insert(X_KEY.to_string(), x);
    replacement.insert(Y_KEY.to_string(), y);
    replacement.insert(WIRES_KEY.to_string(), wires);
    if disabled {
        replacement.insert(DISABLED_KEY.to_string(), Value::Bool(true));
    }
    replacement
}
