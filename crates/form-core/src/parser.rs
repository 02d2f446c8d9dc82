//! Template field-stream parsing

use serde::Deserialize;

use crate::{Element, ElementKind, FormError, Result};

/// One `(name, type)` pair emitted by the template scanner
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDescriptor {
    /// Field name, unique within the template (enforced by the scanner)
    pub name: String,

    /// Field kind
    #[serde(rename = "type")]
    pub kind: ElementKind,
}

/// Parse a scanned field stream into unset elements
///
/// The stream is a JSON array of `{ "name": ..., "type": ... }`
/// descriptors, in template scan order:
///
/// ```json
/// [
///     { "name": "age", "type": "text" },
///     { "name": "signed", "type": "checkbox" }
/// ]
/// ```
pub fn parse_field_stream(json: &str) -> Result<Vec<Element>> {
    let descriptors: Vec<FieldDescriptor> =
        serde_json::from_str(json).map_err(|e| FormError::InvalidTemplate(e.to_string()))?;
    Ok(build_elements(
        descriptors.into_iter().map(|d| (d.name, d.kind)),
    ))
}

/// Build unset elements from `(name, kind)` pairs, preserving order
pub fn build_elements(pairs: impl IntoIterator<Item = (String, ElementKind)>) -> Vec<Element> {
    pairs
        .into_iter()
        .map(|(name, kind)| Element::new(name, kind))
        .collect()
}
