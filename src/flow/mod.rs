//! The flow document and its two structural shapes.

use crate::error::{DocumentError, json_kind};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

pub mod entry;

const FLOWS_KEY: &str = "flows";

/// Whether a document stores its nodes in a flat list or inside containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentShape {
    /// Every entry is a node, tab or subflow marker without child lists.
    Flat,
    /// At least one top-level entry carries a `nodes` container.
    Nested,
}

impl DocumentShape {
    /// Decides the shape from the top-level entries only.
    ///
    /// Deeper entries are never inspected, so a top level without any `nodes`
    /// key is treated as flat even if members further down are shaped
    /// inconsistently.
    pub fn detect(entries: &[Value]) -> Self {
        let nested = entries
            .iter()
            .filter_map(Value::as_object)
            .any(|item| item.contains_key(entry::NODES_KEY));
        if nested {
            DocumentShape::Nested
        } else {
            DocumentShape::Flat
        }
    }
}

/// A deserialized flow document.
///
/// Documents arrive either as a bare array of entries or wrapped as
/// `{"flows": [...]}`. The wrapper, including any sibling fields such as a
/// revision marker, is kept so the document can be written back unchanged
/// apart from its entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowDocument {
    pub entries: Vec<Value>,
    wrapper: Option<Map<String, Value>>,
}

impl FlowDocument {
    pub fn new(entries: Vec<Value>) -> Self {
        Self {
            entries,
            wrapper: None,
        }
    }

    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        match value {
            Value::Array(entries) => Ok(Self::new(entries)),
            Value::Object(mut wrapper) => match wrapper.get_mut(FLOWS_KEY).map(Value::take) {
                Some(Value::Array(entries)) => Ok(Self {
                    entries,
                    wrapper: Some(wrapper),
                }),
                Some(other) => Err(DocumentError::InvalidRoot {
                    found: json_kind(&other),
                }),
                None => Err(DocumentError::InvalidRoot {
                    found: "an object without 'flows'",
                }),
            },
            other => Err(DocumentError::InvalidRoot {
                found: json_kind(&other),
            }),
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, DocumentError> {
        Self::from_value(serde_json::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn is_wrapped(&self) -> bool {
        self.wrapper.is_some()
    }

    pub fn shape(&self) -> DocumentShape {
        DocumentShape::detect(&self.entries)
    }

    /// Rebuilds the JSON value in the shape it was read in.
    pub fn to_value(&self) -> Value {
        let entries = Value::Array(self.entries.clone());
        match &self.wrapper {
            Some(wrapper) => {
                let mut wrapper = wrapper.clone();
                wrapper.insert(FLOWS_KEY.to_string(), entries);
                Value::Object(wrapper)
            }
            None => entries,
        }
    }

    /// Two-space indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(&self.to_value())?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let path = path.as_ref();
        let text = self.to_json_pretty()?;
        fs::write(path, text).map_err(|source| DocumentError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
