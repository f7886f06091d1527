use crate::flow::DocumentShape;
use crate::flow::entry;
use crate::registry::{SUBFLOW_TYPE, TAB_TYPE};
use serde_json::Value;

fn order_key(item: &Value) -> u8 {
    match item.get(entry::TYPE_KEY).and_then(Value::as_str).map(str::trim) {
        Some(TAB_TYPE) => 0,
        Some(SUBFLOW_TYPE) => 1,
        _ => 2,
    }
}

/// Moves tabs, then subflows, ahead of ordinary nodes in a flat document.
///
/// The sort is stable, so nodes keep their relative order within each group.
/// Nested documents, empty lists and lists holding any non-object member are
/// left as they are. Returns whether anything moved.
pub fn ensure_flow_order(entries: &mut [Value]) -> bool {
    if entries.is_empty() || !entries.iter().all(Value::is_object) {
        return false;
    }
    if DocumentShape::detect(entries) == DocumentShape::Nested {
        return false;
    }
    if entries.is_sorted_by_key(order_key) {
        return false;
    }
    entries.sort_by_key(order_key);
    true
}
