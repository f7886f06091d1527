//! Common fixtures for flow document tests.
use serde_json::{Value, json};

/// A flat document with a tab, a subflow, two custom nodes and a group.
///
/// `custom-grp` is unknown, so after normalization the debug node's `g` points
/// at a placeholder.
#[allow(dead_code)]
pub fn flat_document() -> Vec<Value> {
    vec![
        json!({ "id": "inj", "type": "inject", "z": "tab1", "x": 100, "y": 80, "wires": [["fn"]] }),
        json!({ "id": "tab1", "type": "tab", "label": "Main" }),
        json!({
            "id": "fn",
            "type": "node-red-contrib-fancy",
            "name": "Fancy",
            "z": "tab1",
            "x": 300,
            "y": 80,
            "wires": [["dbg"], ["sf-inst"]],
            "fancyOption": "on"
        }),
        json!({ "id": "sf1", "type": "subflow", "name": "Helper", "in": [], "out": [] }),
        json!({ "id": "sf-inst", "type": "subflow:sf1", "z": "tab1", "wires": [] }),
        json!({ "id": "grp", "type": "custom-grp", "z": "tab1", "label": "Box" }),
        json!({ "id": "dbg", "type": "debug", "z": "tab1", "g": "grp", "wires": [] }),
        json!({ "id": "lost", "type": "unknown", "z": "tab1", "disabled": true, "wires": [[], []] }),
    ]
}

/// A nested document: flows own their nodes, configs and subflows.
#[allow(dead_code)]
pub fn nested_document() -> Vec<Value> {
    vec![
        json!({
            "id": "tab1",
            "type": "tab",
            "label": "Main",
            "nodes": [
                { "id": "a", "type": "inject", "wires": [["b"]] },
                { "id": "b", "type": "vendor-transform", "x": 10.5, "wires": [["c"]] },
                { "id": "c", "type": "debug", "wires": [] }
            ],
            "configs": [
                { "id": "cfg", "type": "vendor-broker", "host": "localhost" },
                { "type": "vendor-no-id" }
            ],
            "subflows": [
                {
                    "id": "sf1",
                    "type": "subflow",
                    "nodes": [{ "id": "s1", "type": "vendor-inner", "label": "Inner", "wires": [[]] }]
                }
            ]
        }),
        json!({ "id": "n-top", "type": "inject", "wires": [] }),
    ]
}

/// Collects `(id, port, target)` for every wire in a flat entry list.
#[allow(dead_code)]
pub fn edges(entries: &[Value]) -> Vec<(String, usize, String)> {
    let mut edges = Vec::new();
    for entry in entries {
        let Some(id) = entry.get("id").and_then(Value::as_str) else {
            continue;
        };
        let Some(ports) = entry.get("wires").and_then(Value::as_array) else {
            continue;
        };
        for (port, targets) in ports.iter().enumerate() {
            for target in targets.as_array().into_iter().flatten() {
                if let Some(target) = target.as_str() {
                    edges.push((id.to_string(), port, target.to_string()));
                }
            }
        }
    }
    edges.sort();
    edges
}

/// All string ids in a flat entry list, sorted.
#[allow(dead_code)]
pub fn ids(entries: &[Value]) -> Vec<String> {
    let mut ids: Vec<String> = entries
        .iter()
        .filter_map(|e| e.get("id").and_then(Value::as_str).map(str::to_string))
        .collect();
    ids.sort();
    ids
}
