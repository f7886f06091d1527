//! The set of node types the target runtime can execute.
//!
//! A registry is resolved once, from the runtime's node manifest when one is
//! available and from [`FALLBACK_KNOWN_TYPES`] otherwise. Resolution never
//! fails: a missing or malformed manifest is logged and replaced by the
//! fallback set, so every registry is non-empty.

use crate::error::ManifestError;
use ahash::AHashSet;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, warn};

pub mod builtin;
mod manifest;

pub use builtin::*;

/// Environment variable naming the manifest used by [`TypeRegistry::global`].
pub const MANIFEST_ENV_VAR: &str = "FLOWCOMPAT_MANIFEST";

/// Where a registry's types came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrySource {
    Manifest,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: AHashSet<String>,
    source: RegistrySource,
}

enum ManifestInput {
    None,
    Value(Value),
    File(PathBuf),
}

pub struct TypeRegistryBuilder {
    manifest: ManifestInput,
    extra_types: Vec<String>,
}

impl TypeRegistryBuilder {
    pub fn new() -> Self {
        Self {
            manifest: ManifestInput::None,
            extra_types: Vec::new(),
        }
    }

    /// Resolves types from an already-deserialized manifest.
    pub fn with_manifest_value(mut self, manifest: Value) -> Self {
        self.manifest = ManifestInput::Value(manifest);
        self
    }

    /// Resolves types from a manifest file, read when `build` is called.
    pub fn with_manifest_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest = ManifestInput::File(path.into());
        self
    }

    /// Marks an additional type as known, on top of whatever the manifest yields.
    pub fn with_type(mut self, type_name: &str) -> Self {
        self.extra_types.push(type_name.to_string());
        self
    }

    pub fn build(self) -> TypeRegistry {
        let resolved = match self.manifest {
            ManifestInput::None => None,
            ManifestInput::Value(value) => Some(manifest::collect_types(&value)),
            ManifestInput::File(path) => {
                Some(manifest::read_file(&path).and_then(|value| manifest::collect_types(&value)))
            }
        };

        let mut registry = match resolved {
            Some(Ok(mut types)) => {
                types.extend(ALWAYS_KNOWN_TYPES.iter().map(|t| t.to_string()));
                debug!(count = types.len(), "Resolved known node types from manifest");
                TypeRegistry {
                    types,
                    source: RegistrySource::Manifest,
                }
            }
            Some(Err(ManifestError::Missing(path))) => {
                debug!(path = %path.display(), "No node manifest found, using built-in types");
                TypeRegistry::fallback()
            }
            Some(Err(e)) => {
                warn!(error = %e, "Ignoring node manifest, using built-in types");
                TypeRegistry::fallback()
            }
            None => TypeRegistry::fallback(),
        };

        registry.types.extend(self.extra_types);
        registry.types.remove(UNRESOLVED_TYPE);
        registry
    }
}

impl Default for TypeRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    pub fn builder() -> TypeRegistryBuilder {
        TypeRegistryBuilder::new()
    }

    /// The built-in set used when no manifest is available.
    pub fn builtin() -> Self {
        Self::builder().build()
    }

    /// Resolves a registry from a deserialized manifest, falling back when it
    /// is malformed or lists nothing.
    pub fn from_manifest(manifest: &Value) -> Self {
        Self::builder().with_manifest_value(manifest.clone()).build()
    }

    /// Like [`TypeRegistry::from_manifest`], parsing the manifest text first.
    pub fn from_manifest_str(text: &str) -> Self {
        match manifest::parse_str(text) {
            Ok(value) => Self::builder().with_manifest_value(value).build(),
            Err(e) => {
                warn!(error = %e, "Ignoring node manifest, using built-in types");
                Self::builtin()
            }
        }
    }

    /// Like [`TypeRegistry::from_manifest`], reading the manifest from disk.
    pub fn from_manifest_file(path: impl AsRef<Path>) -> Self {
        Self::builder()
            .with_manifest_file(path.as_ref())
            .build()
    }

    /// Process-wide registry, resolved on first access.
    ///
    /// Uses the manifest named by `FLOWCOMPAT_MANIFEST` when set, the built-in
    /// set otherwise. Never refreshed afterwards.
    pub fn global() -> &'static TypeRegistry {
        static GLOBAL: OnceLock<TypeRegistry> = OnceLock::new();
        GLOBAL.get_or_init(|| match std::env::var_os(MANIFEST_ENV_VAR) {
            Some(path) => Self::from_manifest_file(PathBuf::from(path)),
            None => Self::builtin(),
        })
    }

    fn fallback() -> Self {
        Self {
            types: FALLBACK_KNOWN_TYPES.iter().map(|t| t.to_string()).collect(),
            source: RegistrySource::Fallback,
        }
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains(type_name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn source(&self) -> RegistrySource {
        self.source
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }
}
