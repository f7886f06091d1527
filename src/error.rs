use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or saving a flow document.
///
/// Normalization itself never fails; these only surface from the I/O layer
/// around it.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read flow file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write flow file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse flow JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Flow document root must be an array or an object with a 'flows' array, found {found}")]
    InvalidRoot { found: &'static str },
}

/// Reasons a type manifest could not be used.
///
/// The registry logs these and falls back to the built-in set instead of
/// returning them.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Manifest file '{0}' does not exist")]
    Missing(PathBuf),

    #[error("Could not read manifest file '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Manifest root must be an object keyed by module name")]
    NotAnObject,

    #[error("Manifest did not list any node types")]
    Empty,
}

/// Short JSON kind name used in error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
