//! Form data application

use serde_json::Value;

use crate::{Element, FormError, Result, TextElement};

/// Fill behavior flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillOptions {
    /// Fill values only, leaving rendering attributes untouched
    pub simple: bool,
}

impl FillOptions {
    /// Decode options from a JSON mapping
    ///
    /// Recognizes a `simple` key, which must be a boolean when present.
    /// `null` means defaults.
    pub fn from_value(options: &Value) -> Result<Self> {
        let map = match options {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            _ => {
                return Err(FormError::InvalidFormData(
                    "fill options must be an object".to_string(),
                ))
            }
        };

        match map.get("simple") {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(Value::Bool(simple)) => Ok(Self { simple: *simple }),
            Some(_) => Err(FormError::InvalidMode),
        }
    }
}

/// Apply a form-data mapping to elements
///
/// `data` is a JSON object keyed by field name. An entry for a text
/// field may be a sub-mapping carrying a `value` key plus rendering
/// attributes (`fontSize`, `textXOffset`, `textYOffset`,
/// `textWrapLength`); any other entry is assigned to the element's
/// value directly. Names without a matching element are ignored.
pub fn apply_form_data(elements: &mut [Element], data: &Value) -> Result<()> {
    apply_form_data_with(elements, data, FillOptions::default())
}

/// Apply a form-data mapping with explicit options
pub fn apply_form_data_with(
    elements: &mut [Element],
    data: &Value,
    options: FillOptions,
) -> Result<()> {
    let map = data.as_object().ok_or_else(|| {
        FormError::InvalidFormData("form data must be an object keyed by field name".to_string())
    })?;

    for element in elements.iter_mut() {
        let Some(entry) = map.get(element.name()) else {
            continue;
        };
        match element {
            Element::Text(text) => apply_text_entry(text, entry, options),
            _ => element.set_value(entry.clone()),
        }
    }

    Ok(())
}

/// Apply one form-data entry to a text field
///
/// Object entries are sub-mappings; the `value` key and each attribute
/// key are optional and unknown keys are ignored. In simple mode only
/// the value is applied.
fn apply_text_entry(text: &mut TextElement, entry: &Value, options: FillOptions) {
    let Some(map) = entry.as_object() else {
        text.value = entry.clone();
        return;
    };

    if let Some(value) = map.get("value") {
        text.value = value.clone();
    }
    if options.simple {
        return;
    }
    if let Some(value) = map.get("fontSize") {
        text.font_size = value.clone();
    }
    if let Some(value) = map.get("textXOffset") {
        text.text_x_offset = value.clone();
    }
    if let Some(value) = map.get("textYOffset") {
        text.text_y_offset = value.clone();
    }
    if let Some(value) = map.get("textWrapLength") {
        text.text_wrap_length = value.clone();
    }
}
