//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need to load, normalize and save a flow
//! document.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowcompat::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let registry = TypeRegistry::builtin();
//! let mut document = FlowDocument::from_json_str(r#"[{"id": "1", "type": "custom"}]"#)?;
//! let report = Normalizer::new(&registry).normalize_document(&mut document);
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

// Type resolution
pub use crate::registry::{RegistrySource, TypeRegistry};

// Documents
pub use crate::flow::{DocumentShape, FlowDocument};

// Normalization passes
pub use crate::normalize::{
    NormalizeReport, Normalizer, RewrittenNode, WalkDepth, ensure_flow_order, needs_conversion,
    rewrite_if_unknown,
};
pub use crate::sanitize::strip_placeholder_group_refs;

// Error types
pub use crate::error::{DocumentError, ManifestError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
