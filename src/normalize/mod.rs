//! Rewriting a flow document so the target runtime can load it.
//!
//! A [`Normalizer`] runs the three passes in order: every node whose type the
//! [`TypeRegistry`] does not know is replaced by a placeholder, a flat
//! document is reordered so tabs and subflows load first, and optionally group
//! references to placeholders are dropped. None of the passes can fail; content
//! that does not look like a node is left as it is.

use crate::flow::FlowDocument;
use crate::registry::TypeRegistry;
use crate::sanitize::strip_placeholder_group_refs;
use itertools::Itertools;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::info;

mod ordering;
mod probe;
mod rewriter;
mod walker;

pub use ordering::ensure_flow_order;
pub use probe::needs_conversion;
pub use rewriter::{RewrittenNode, rewrite_if_unknown};
pub use walker::{WalkDepth, any_entry, rewrite_unknown_nodes, walk_entries_mut};

/// What a normalization run changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizeReport {
    pub rewritten: Vec<RewrittenNode>,
    pub reordered: bool,
    pub group_refs_stripped: usize,
}

impl NormalizeReport {
    pub fn is_unchanged(&self) -> bool {
        self.rewritten.is_empty() && !self.reordered && self.group_refs_stripped == 0
    }

    /// Number of replaced nodes per original type, most frequent first.
    pub fn rewritten_type_counts(&self) -> Vec<(&str, usize)> {
        self.rewritten
            .iter()
            .map(|node| node.original_type.as_str())
            .counts()
            .into_iter()
            .sorted_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)))
            .collect()
    }
}

impl fmt::Display for NormalizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "replaced {} node(s)", self.rewritten.len())?;
        if !self.rewritten.is_empty() {
            let types = self
                .rewritten_type_counts()
                .into_iter()
                .map(|(ty, count)| format!("{} x{}", ty, count))
                .join(", ");
            write!(f, " [{}]", types)?;
        }
        if self.reordered {
            write!(f, ", reordered tabs and subflows first")?;
        }
        if self.group_refs_stripped > 0 {
            write!(f, ", removed {} group reference(s)", self.group_refs_stripped)?;
        }
        Ok(())
    }
}

pub struct Normalizer<'r> {
    registry: &'r TypeRegistry,
    depth: WalkDepth,
    sanitize_groups: bool,
}

pub struct NormalizerBuilder<'r> {
    registry: &'r TypeRegistry,
    depth: WalkDepth,
    sanitize_groups: bool,
}

impl<'r> NormalizerBuilder<'r> {
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self {
            registry,
            depth: WalkDepth::default(),
            sanitize_groups: false,
        }
    }

    /// How far to descend into `subflows` containers.
    pub fn depth(mut self, depth: WalkDepth) -> Self {
        self.depth = depth;
        self
    }

    /// Also remove `g` references that point at placeholder nodes.
    pub fn sanitize_groups(mut self, enabled: bool) -> Self {
        self.sanitize_groups = enabled;
        self
    }

    pub fn build(self) -> Normalizer<'r> {
        Normalizer {
            registry: self.registry,
            depth: self.depth,
            sanitize_groups: self.sanitize_groups,
        }
    }
}

impl<'r> Normalizer<'r> {
    pub fn builder(registry: &'r TypeRegistry) -> NormalizerBuilder<'r> {
        NormalizerBuilder::new(registry)
    }

    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self::builder(registry).build()
    }

    /// True when at least one entry has a type the registry does not know.
    pub fn needs_conversion(&self, entries: &[Value]) -> bool {
        needs_conversion(entries, self.registry, self.depth)
    }

    /// Normalizes `entries` in place. An empty list is returned untouched.
    pub fn normalize(&self, entries: &mut [Value]) -> NormalizeReport {
        if entries.is_empty() {
            return NormalizeReport::default();
        }

        let rewritten = rewrite_unknown_nodes(entries, self.registry, self.depth);
        let reordered = ensure_flow_order(entries);
        let group_refs_stripped = if self.sanitize_groups {
            strip_placeholder_group_refs(entries)
        } else {
            0
        };

        let report = NormalizeReport {
            rewritten,
            reordered,
            group_refs_stripped,
        };
        info!(entries = entries.len(), "Normalized flow document: {}", report);
        report
    }

    pub fn normalize_document(&self, document: &mut FlowDocument) -> NormalizeReport {
        self.normalize(&mut document.entries)
    }
}
