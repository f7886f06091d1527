//! Removes group references that point at placeholder nodes.
//!
//! The editor crashes while attaching children to a group whose id belongs to
//! a placeholder, which happens when an unknown `group`-like node was
//! replaced. Only flat documents carry `g` references.

use crate::flow::DocumentShape;
use crate::flow::entry::{self, GROUP_KEY};
use crate::registry::EXISTING_PLACEHOLDER_TYPE;
use ahash::AHashSet;
use serde_json::Value;
use tracing::debug;

/// Deletes `g` from every entry whose group is a placeholder node.
///
/// Returns the number of references removed.
pub fn strip_placeholder_group_refs(entries: &mut [Value]) -> usize {
    if DocumentShape::detect(entries) == DocumentShape::Nested {
        return 0;
    }

    let placeholder_ids: AHashSet<String> = entries
        .iter()
        .filter_map(Value::as_object)
        .filter(|node| entry::type_name(node) == Some(EXISTING_PLACEHOLDER_TYPE))
        .filter_map(|node| entry::id(node)?.as_str().map(str::to_string))
        .collect();
    if placeholder_ids.is_empty() {
        return 0;
    }

    let mut stripped = 0;
    for node in entries.iter_mut().filter_map(Value::as_object_mut) {
        let points_at_placeholder = node
            .get(GROUP_KEY)
            .and_then(Value::as_str)
            .is_some_and(|group| placeholder_ids.contains(group));
        if points_at_placeholder {
            node.shift_remove(GROUP_KEY);
            stripped += 1;
        }
    }

    if stripped > 0 {
        debug!(stripped = stripped, "Removed group references to placeholder nodes");
    }
    stripped
}
