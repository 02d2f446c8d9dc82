//! WASM bindings for rsformfill
//!
//! This crate provides a JavaScript-friendly API for:
//! - Loading the scanned field stream of a form template
//! - Filling fields from a data object
//! - Validating text rendering attributes before server-side rendering
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { FormFields } from 'rsformfill-wasm';
//!
//! await init();
//!
//! const fields = FormFields.fromTemplate(fieldsJson);
//! fields.fill({ age: { value: "30", fontSize: 12.5 }, signed: true });
//! fields.validate();
//!
//! // Hand the populated elements to the rendering backend
//! const elements = fields.toJson();
//! ```

use wasm_bindgen::prelude::*;

use form_core::{apply_form_data_with, parse_field_stream, Element, FillOptions};

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Fillable form fields scanned from a template
#[wasm_bindgen]
pub struct FormFields {
    elements: Vec<Element>,
}

#[wasm_bindgen]
impl FormFields {
    /// Load fields from a scanned field stream
    ///
    /// @param json - JSON array of `{ name, type }` descriptors
    /// @returns FormFields instance
    #[wasm_bindgen(js_name = fromTemplate)]
    pub fn from_template(json: &str) -> Result<FormFields, JsValue> {
        let elements =
            parse_field_stream(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(FormFields { elements })
    }

    /// Fill fields from a data object
    ///
    /// Text fields accept either a plain value or a sub-mapping with
    /// `value`, `fontSize`, `textXOffset`, `textYOffset` and
    /// `textWrapLength` keys.
    ///
    /// @param data - Object keyed by field name
    pub fn fill(&mut self, data: JsValue) -> Result<(), JsValue> {
        self.fill_with(data, JsValue::NULL)
    }

    /// Fill fields with explicit options
    ///
    /// @param data - Object keyed by field name
    /// @param options - Options object; `{ simple: true }` fills values
    ///                  only and leaves rendering attributes untouched
    #[wasm_bindgen(js_name = fillWith)]
    pub fn fill_with(&mut self, data: JsValue, options: JsValue) -> Result<(), JsValue> {
        let data: serde_json::Value = serde_wasm_bindgen::from_value(data)?;
        let options: serde_json::Value = serde_wasm_bindgen::from_value(options)?;

        let options =
            FillOptions::from_value(&options).map_err(|e| JsValue::from_str(&e.to_string()))?;
        apply_form_data_with(&mut self.elements, &data, options)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Validate every field, failing on the first violation
    pub fn validate(&self) -> Result<(), JsValue> {
        for element in &self.elements {
            element
                .validate()
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
        }
        Ok(())
    }

    /// Field names in template scan order
    ///
    /// @returns Array of names
    #[wasm_bindgen(js_name = fieldNames)]
    pub fn field_names(&self) -> Vec<JsValue> {
        self.elements
            .iter()
            .map(|e| JsValue::from_str(e.name()))
            .collect()
    }

    /// Number of fields
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.elements.len()
    }

    /// Export the populated elements for the rendering backend
    ///
    /// @returns Array of element objects tagged by `type`
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.elements).map_err(JsValue::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_from_template() {
        let fields = FormFields::from_template(
            r#"[
                { "name": "age", "type": "text" },
                { "name": "signed", "type": "checkbox" }
            ]"#,
        )
        .unwrap();

        assert_eq!(fields.length(), 2);
    }

    #[wasm_bindgen_test]
    fn test_unfilled_fields_validate() {
        let fields =
            FormFields::from_template(r#"[{ "name": "age", "type": "text" }]"#).unwrap();

        assert!(fields.validate().is_ok());
    }
}
