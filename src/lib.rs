//! # flowcompat - Flow Document Compatibility Normalizer
//!
//! **flowcompat** prepares visual dataflow documents (directed graphs of typed nodes
//! with numbered output ports) for a runtime that may not have every node type
//! installed. Nodes whose type the runtime does not recognize are rewritten into a
//! generic placeholder that keeps the node's id, wiring, port count and position,
//! so the document still loads and renders with its topology intact.
//!
//! ## Core Workflow
//!
//! 1.  **Resolve Known Types**: Build a [`TypeRegistry`](registry::TypeRegistry) once at
//!     startup, from the runtime's node manifest or the built-in fallback set.
//! 2.  **Load the Document**: Read a [`FlowDocument`](flow::FlowDocument) from JSON. Both a
//!     bare array and a `{"flows": [...]}` wrapper are accepted.
//! 3.  **Probe (optional)**: [`Normalizer::needs_conversion`](normalize::Normalizer::needs_conversion)
//!     is a cheap read-only scan that tells you whether a rewrite is needed at all.
//! 4.  **Normalize**: [`Normalizer::normalize`](normalize::Normalizer::normalize) replaces
//!     unknown nodes in place and moves tabs and subflows ahead of ordinary nodes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowcompat::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let registry = TypeRegistry::from_manifest_file(".config.nodes.json");
//!     let mut document = FlowDocument::from_file("flows.json")?;
//!
//!     let normalizer = Normalizer::builder(&registry).sanitize_groups(true).build();
//!     if normalizer.needs_conversion(&document.entries) {
//!         let report = normalizer.normalize_document(&mut document);
//!         println!("{}", report);
//!     } else {
//!         ensure_flow_order(&mut document.entries);
//!     }
//!
//!     document.save("flows.json")?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod flow;
pub mod normalize;
pub mod prelude;
pub mod registry;
pub mod sanitize;

#[cfg(feature = "python-bindings")]
mod python;
