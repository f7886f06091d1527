use crate::flow::FlowDocument;
use crate::normalize::Normalizer;
use crate::registry::TypeRegistry;
use pyo3::prelude::*;
use std::borrow::Cow;

fn registry_for(manifest_json: Option<&str>) -> Cow<'static, TypeRegistry> {
    match manifest_json {
        Some(text) => Cow::Owned(TypeRegistry::from_manifest_str(text)),
        None => Cow::Borrowed(TypeRegistry::global()),
    }
}

fn parse_document(flows_json: &str) -> PyResult<FlowDocument> {
    FlowDocument::from_json_str(flows_json)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
}

/// Replaces unknown node types with placeholder nodes.
///
/// Args:
///     flows_json (str): The flow document, either a JSON array of entries
///         or an object with a "flows" array.
///     manifest_json (str | None): The runtime's node manifest. When omitted
///         the process-wide registry is used.
///
/// Returns:
///     str: The normalized document as indented JSON, in the same shape it
///         was given.
///
/// Raises:
///     ValueError: If the document is not valid JSON or has an unsupported
///         root.
#[pyfunction]
#[pyo3(signature = (flows_json, manifest_json=None))]
fn normalize_flows(flows_json: &str, manifest_json: Option<&str>) -> PyResult<String> {
    let registry = registry_for(manifest_json);
    let mut document = parse_document(flows_json)?;
    Normalizer::new(&registry).normalize_document(&mut document);
    document
        .to_json_pretty()
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
}

/// Returns True when the document contains a node type the runtime does not know.
#[pyfunction]
#[pyo3(signature = (flows_json, manifest_json=None))]
fn needs_conversion(flows_json: &str, manifest_json: Option<&str>) -> PyResult<bool> {
    let registry = registry_for(manifest_json);
    let document = parse_document(flows_json)?;
    Ok(Normalizer::new(&registry).needs_conversion(&document.entries))
}

/// Flow document compatibility normalizer.
#[pymodule]
fn flowcompat(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(normalize_flows, m)?)?;
    m.add_function(wrap_pyfunction!(needs_conversion, m)?)?;
    Ok(())
}
