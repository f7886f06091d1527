use super::rewriter::{RewrittenNode, rewrite_if_unknown};
use crate::flow::entry::{CONFIGS_KEY, NODES_KEY, SUBFLOWS_KEY};
use crate::registry::TypeRegistry;
use serde_json::Value;

/// How far the walk descends into `subflows` containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkDepth {
    /// Only the `nodes` list of each `subflows` member is visited; the member
    /// itself and its other containers are not.
    TwoLevel,
    /// `subflows` members are walked like any other entry list.
    #[default]
    Recursive,
}

/// Visits every entry of `entries` depth-first, children before their owner.
///
/// For each object entry the `nodes`, `configs` and `subflows` containers are
/// walked in that order, then the entry itself is passed to `visit`.
/// Non-object members and non-array containers are skipped.
pub fn walk_entries_mut<F>(entries: &mut [Value], depth: WalkDepth, visit: &mut F)
where
    F: FnMut(&mut Value),
{
    for item in entries.iter_mut() {
        let Some(entry) = item.as_object_mut() else {
            continue;
        };
        if let Some(Value::Array(nodes)) = entry.get_mut(NODES_KEY) {
            walk_entries_mut(nodes, depth, visit);
        }
        if let Some(Value::Array(configs)) = entry.get_mut(CONFIGS_KEY) {
            walk_entries_mut(configs, depth, visit);
        }
        if let Some(Value::Array(subflows)) = entry.get_mut(SUBFLOWS_KEY) {
            match depth {
                WalkDepth::Recursive => walk_entries_mut(subflows, depth, visit),
                WalkDepth::TwoLevel => {
                    for sub in subflows.iter_mut() {
                        if let Some(Value::Array(nodes)) = sub.get_mut(NODES_KEY) {
                            walk_entries_mut(nodes, depth, visit);
                        }
                    }
                }
            }
        }
        visit(item);
    }
}

/// Read-only counterpart of [`walk_entries_mut`] that stops at the first
/// entry for which `predicate` holds.
pub fn any_entry<P>(entries: &[Value], depth: WalkDepth, predicate: &mut P) -> bool
where
    P: FnMut(&Value) -> bool,
{
    for item in entries {
        let Some(entry) = item.as_object() else {
            continue;
        };
        if let Some(Value::Array(nodes)) = entry.get(NODES_KEY) {
            if any_entry(nodes, depth, predicate) {
                return true;
            }
        }
        if let Some(Value::Array(configs)) = entry.get(CONFIGS_KEY) {
            if any_entry(configs, depth, predicate) {
                return true;
            }
        }
        if let Some(Value::Array(subflows)) = entry.get(SUBFLOWS_KEY) {
            let found = match depth {
                WalkDepth::Recursive => any_entry(subflows, depth, predicate),
                WalkDepth::TwoLevel => subflows.iter().any(|sub| match sub.get(NODES_KEY) {
                    Some(Value::Array(nodes)) => any_entry(nodes, depth, predicate),
                    _ => false,
                }),
            };
            if found {
                return true;
            }
        }
        if predicate(item) {
            return true;
        }
    }
    false
}

/// Rewrites every unknown node in the document, in place.
///
/// Returns the replaced nodes in visiting order.
pub fn rewrite_unknown_nodes(
    entries: &mut [Value],
    known: &TypeRegistry,
    depth: WalkDepth,
) -> Vec<RewrittenNode> {
    let mut rewritten = Vec::new();
    walk_entries_mut(entries, depth, &mut |entry| {
        if let Some(node) = rewrite_if_unknown(entry, known) {
            rewritten.push(node);
        }
    });
    rewritten
}
