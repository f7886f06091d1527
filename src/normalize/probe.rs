use super::walker::{WalkDepth, any_entry};
use crate::flow::entry;
use crate::registry::TypeRegistry;
use serde_json::Value;

/// Quick read-only scan: true when any visited entry has a string `type` that
/// `known` does not contain.
///
/// Unlike the rewrite itself this does not require an `id`, so it may report
/// `true` for a document whose only unknown entries will be skipped.
pub fn needs_conversion(entries: &[Value], known: &TypeRegistry, depth: WalkDepth) -> bool {
    any_entry(entries, depth, &mut |item| {
        item.as_object()
            .and_then(entry::type_name)
            .is_some_and(|ty| !known.contains(ty))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn known_document_needs_nothing() {
        let known = TypeRegistry::builtin();
        let flows = vec![
            json!({ "id": "t", "type": "tab" }),
            json!({ "id": "1", "type": "inject", "wires": [["2"]] }),
            json!({ "id": "2", "type": "debug", "wires": [] }),
            json!({ "id": "3", "type": 12 }),
            json!("stray"),
        ];
        assert!(!needs_conversion(&flows, &known, WalkDepth::Recursive));
    }

    #[test]
    fn finds_unknown_in_subflow_nodes() {
        let known = TypeRegistry::builtin();
        let flows = vec![json!({
            "id": "t",
            "type": "tab",
            "nodes": [],
            "subflows": [{ "id": "s", "type": "subflow", "nodes": [{ "type": "custom" }] }]
        })];
        assert!(needs_conversion(&flows, &known, WalkDepth::TwoLevel));
        assert!(needs_conversion(&flows, &known, WalkDepth::Recursive));
    }

    #[test]
    fn sentinel_always_needs_conversion() {
        let known = TypeRegistry::builtin();
        let flows = vec![json!({ "id": "1", "type": "unknown" })];
        assert!(needs_conversion(&flows, &known, WalkDepth::Recursive));
    }
}
