//! Reading the runtime's installed-node manifest.
//!
//! The manifest maps module name to `{"nodes": {definition: {"types": [..]}}}`.
//! Anything that does not match that shape is skipped one level at a time, so a
//! single bad module never hides the types listed by the others.

use crate::error::ManifestError;
use ahash::AHashSet;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Collects every type string listed in a manifest.
pub(crate) fn collect_types(manifest: &Value) -> Result<AHashSet<String>, ManifestError> {
    let modules = manifest.as_object().ok_or(ManifestError::NotAnObject)?;

    let types: AHashSet<String> = modules
        .values()
        .filter_map(|module| module.get("nodes")?.as_object())
        .flat_map(|definitions| definitions.values())
        .filter_map(|definition| definition.get("types")?.as_array())
        .flatten()
        .filter_map(|ty| ty.as_str().map(str::to_string))
        .collect();

    if types.is_empty() {
        return Err(ManifestError::Empty);
    }
    Ok(types)
}

/// Parses manifest text into a JSON value.
pub(crate) fn parse_str(text: &str) -> Result<Value, ManifestError> {
    Ok(serde_json::from_str(text)?)
}

/// Reads and parses a manifest file.
pub(crate) fn read_file(path: &Path) -> Result<Value, ManifestError> {
    if !path.is_file() {
        return Err(ManifestError::Missing(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|source| ManifestError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collects_across_modules_and_definitions() {
        let manifest = json!({
            "node-red": {
                "nodes": {
                    "inject": { "types": ["inject"] },
                    "mqtt": { "types": ["mqtt in", "mqtt out", "mqtt-broker"] }
                }
            },
            "node-red-contrib-foo": {
                "nodes": { "foo": { "types": ["foo"] } }
            }
        });

        let types = collect_types(&manifest).unwrap();
        assert_eq!(types.len(), 5);
        assert!(types.contains("mqtt-broker"));
        assert!(types.contains("foo"));
    }

    #[test]
    fn skips_malformed_members_individually() {
        let manifest = json!({
            "broken": "not an object",
            "no-nodes": { "version": "1.0" },
            "bad-nodes": { "nodes": ["inject"] },
            "good": {
                "nodes": {
                    "missing-types": { "name": "x" },
                    "wrong-types": { "types": "switch" },
                    "mixed": { "types": ["change", 42, null] }
                }
            }
        });

        let types = collect_types(&manifest).unwrap();
        assert_eq!(types.len(), 1);
        assert!(types.contains("change"));
    }

    #[test]
    fn rejects_non_object_root_and_empty_collection() {
        assert!(matches!(
            collect_types(&json!(["inject"])),
            Err(ManifestError::NotAnObject)
        ));
        assert!(matches!(
            collect_types(&json!({ "m": { "nodes": {} } })),
            Err(ManifestError::Empty)
        ));
    }

    #[test]
    fn missing_file_is_reported() {
        let result = read_file(Path::new("/definitely/not/here/.config.nodes.json"));
        assert!(matches!(result, Err(ManifestError::Missing(_))));
    }
}
