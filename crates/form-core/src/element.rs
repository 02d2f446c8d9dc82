//! Form field element types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value::{is_numeric, is_provided, is_whole_number};
use crate::{FormError, Result};

/// Field kind reported by the template scanner
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Checkbox,
    Radio,
    Dropdown,
    Signature,
    Image,
}

/// Form field element (tagged union)
///
/// One variant per field kind; only the text variant carries the
/// rendering-adjustment attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    /// Text field with optional rendering adjustments
    Text(TextElement),

    /// Checkbox field
    Checkbox(WidgetElement),

    /// Radio group field
    Radio(WidgetElement),

    /// Dropdown field
    Dropdown(WidgetElement),

    /// Signature field
    Signature(WidgetElement),

    /// Image field
    Image(WidgetElement),
}

/// Text field element
///
/// The four rendering attributes start unset (`Null`) and are populated
/// from form data. A zero, empty, or null attribute counts as unset and
/// is skipped by validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextElement {
    /// Field name from the template
    name: String,

    /// Current fill value
    #[serde(default)]
    pub value: Value,

    /// Font size override in points
    #[serde(rename = "fontSize")]
    #[serde(default)]
    pub font_size: Value,

    /// Horizontal offset for rendered text, in points
    #[serde(rename = "textXOffset")]
    #[serde(default)]
    pub text_x_offset: Value,

    /// Vertical offset for rendered text, in points
    #[serde(rename = "textYOffset")]
    #[serde(default)]
    pub text_y_offset: Value,

    /// Maximum characters per wrapped line
    #[serde(rename = "textWrapLength")]
    #[serde(default)]
    pub text_wrap_length: Value,
}

/// Non-text field element (checkbox, radio, dropdown, signature, image)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetElement {
    /// Field name from the template
    name: String,

    /// Current fill value
    #[serde(default)]
    pub value: Value,
}

impl Element {
    /// Create an element for a scanned `(name, kind)` pair with no value
    pub fn new(name: impl Into<String>, kind: ElementKind) -> Self {
        Self::with_value(name, kind, Value::Null)
    }

    /// Create an element with an initial fill value
    pub fn with_value(name: impl Into<String>, kind: ElementKind, value: Value) -> Self {
        let name = name.into();
        match kind {
            ElementKind::Text => Element::Text(TextElement {
                name,
                value,
                font_size: Value::Null,
                text_x_offset: Value::Null,
                text_y_offset: Value::Null,
                text_wrap_length: Value::Null,
            }),
            ElementKind::Checkbox => Element::Checkbox(WidgetElement { name, value }),
            ElementKind::Radio => Element::Radio(WidgetElement { name, value }),
            ElementKind::Dropdown => Element::Dropdown(WidgetElement { name, value }),
            ElementKind::Signature => Element::Signature(WidgetElement { name, value }),
            ElementKind::Image => Element::Image(WidgetElement { name, value }),
        }
    }

    /// Get the field name
    pub fn name(&self) -> &str {
        match self {
            Element::Text(e) => &e.name,
            Element::Checkbox(e)
            | Element::Radio(e)
            | Element::Dropdown(e)
            | Element::Signature(e)
            | Element::Image(e) => &e.name,
        }
    }

    /// Get the field kind
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Text(_) => ElementKind::Text,
            Element::Checkbox(_) => ElementKind::Checkbox,
            Element::Radio(_) => ElementKind::Radio,
            Element::Dropdown(_) => ElementKind::Dropdown,
            Element::Signature(_) => ElementKind::Signature,
            Element::Image(_) => ElementKind::Image,
        }
    }

    /// Get the current fill value
    pub fn value(&self) -> &Value {
        match self {
            Element::Text(e) => &e.value,
            Element::Checkbox(e)
            | Element::Radio(e)
            | Element::Dropdown(e)
            | Element::Signature(e)
            | Element::Image(e) => &e.value,
        }
    }

    /// Get a mutable reference to the fill value
    pub fn value_mut(&mut self) -> &mut Value {
        match self {
            Element::Text(e) => &mut e.value,
            Element::Checkbox(e)
            | Element::Radio(e)
            | Element::Dropdown(e)
            | Element::Signature(e)
            | Element::Image(e) => &mut e.value,
        }
    }

    /// Replace the fill value
    pub fn set_value(&mut self, value: Value) {
        *self.value_mut() = value;
    }

    /// Borrow the text attributes when this is a text field
    pub fn as_text(&self) -> Option<&TextElement> {
        match self {
            Element::Text(e) => Some(e),
            _ => None,
        }
    }

    /// Mutably borrow the text attributes when this is a text field
    pub fn as_text_mut(&mut self) -> Option<&mut TextElement> {
        match self {
            Element::Text(e) => Some(e),
            _ => None,
        }
    }

    /// Check the rendering attributes before handing off to the renderer
    ///
    /// Only text fields carry checked attributes; every other kind
    /// passes unconditionally. Fails on the first violated rule and
    /// never mutates the element.
    pub fn validate(&self) -> Result<()> {
        match self {
            Element::Text(e) => e.validate(),
            _ => Ok(()),
        }
    }
}

impl TextElement {
    /// Get the field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check the rendering attributes
    ///
    /// Attributes are checked in a fixed order: font size, x-offset,
    /// y-offset, wrap length. Font size and offsets accept any number;
    /// wrap length accepts whole numbers only. Unset attributes
    /// (null, zero, empty) are skipped.
    pub fn validate(&self) -> Result<()> {
        if is_provided(&self.font_size) && !is_numeric(&self.font_size) {
            return Err(FormError::InvalidFontSize(self.name.clone()));
        }
        if is_provided(&self.text_x_offset) && !is_numeric(&self.text_x_offset) {
            return Err(FormError::InvalidTextOffset(self.name.clone()));
        }
        if is_provided(&self.text_y_offset) && !is_numeric(&self.text_y_offset) {
            return Err(FormError::InvalidTextOffset(self.name.clone()));
        }
        if is_provided(&self.text_wrap_length) && !is_whole_number(&self.text_wrap_length) {
            return Err(FormError::InvalidWrapLength(self.name.clone()));
        }
        Ok(())
    }
}

impl WidgetElement {
    /// Get the field name
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_text_element_is_unset() {
        let element = Element::new("age", ElementKind::Text);

        assert_eq!(element.name(), "age");
        assert_eq!(element.kind(), ElementKind::Text);
        assert_eq!(element.value(), &Value::Null);

        let text = element.as_text().unwrap();
        assert_eq!(text.font_size, Value::Null);
        assert_eq!(text.text_wrap_length, Value::Null);
    }

    #[test]
    fn test_unset_attributes_validate() {
        let element = Element::with_value("age", ElementKind::Text, json!("30"));
        element.validate().unwrap();
        assert_eq!(element.value(), &json!("30"));
    }

    #[test]
    fn test_valid_attributes() {
        let mut element = Element::with_value("age", ElementKind::Text, json!("30"));
        let text = element.as_text_mut().unwrap();
        text.font_size = json!(12.5);
        text.text_wrap_length = json!(10);

        element.validate().unwrap();
    }

    #[test]
    fn test_non_numeric_font_size() {
        let mut element = Element::new("age", ElementKind::Text);
        element.as_text_mut().unwrap().font_size = json!("12");

        assert_eq!(
            element.validate(),
            Err(FormError::InvalidFontSize("age".to_string()))
        );
    }

    #[test]
    fn test_non_numeric_offsets() {
        let mut element = Element::new("age", ElementKind::Text);
        element.as_text_mut().unwrap().text_x_offset = json!("5");
        assert_eq!(
            element.validate(),
            Err(FormError::InvalidTextOffset("age".to_string()))
        );

        let mut element = Element::new("age", ElementKind::Text);
        element.as_text_mut().unwrap().text_y_offset = json!([1, 2]);
        assert_eq!(
            element.validate(),
            Err(FormError::InvalidTextOffset("age".to_string()))
        );
    }

    #[test]
    fn test_fractional_wrap_length() {
        let mut element = Element::new("age", ElementKind::Text);
        element.as_text_mut().unwrap().text_wrap_length = json!(10.5);

        assert_eq!(
            element.validate(),
            Err(FormError::InvalidWrapLength("age".to_string()))
        );
    }

    #[test]
    fn test_check_order_font_size_first() {
        // Font size and wrap length are both wrong; the font size rule
        // is checked first.
        let mut element = Element::new("age", ElementKind::Text);
        let text = element.as_text_mut().unwrap();
        text.font_size = json!("big");
        text.text_wrap_length = json!(10.5);

        assert_eq!(
            element.validate(),
            Err(FormError::InvalidFontSize("age".to_string()))
        );
    }

    #[test]
    fn test_check_order_offsets_before_wrap() {
        let mut element = Element::new("age", ElementKind::Text);
        let text = element.as_text_mut().unwrap();
        text.text_y_offset = json!("up");
        text.text_wrap_length = json!(10.5);

        assert_eq!(
            element.validate(),
            Err(FormError::InvalidTextOffset("age".to_string()))
        );
    }

    #[test]
    fn test_zero_attributes_are_unset() {
        let mut element = Element::new("age", ElementKind::Text);
        let text = element.as_text_mut().unwrap();
        text.font_size = json!(0);
        text.text_x_offset = json!(0.0);
        text.text_wrap_length = json!("");

        // Zero and empty count as "not provided", so the wrong-kind
        // empty string in the wrap slot is never inspected.
        element.validate().unwrap();
    }

    #[test]
    fn test_boolean_attributes_are_rejected() {
        // A JSON boolean is not a number, so a provided `true` fails
        // the kind check; `false` is falsy and skipped.
        let mut element = Element::new("age", ElementKind::Text);
        element.as_text_mut().unwrap().font_size = json!(true);
        assert_eq!(
            element.validate(),
            Err(FormError::InvalidFontSize("age".to_string()))
        );

        let mut element = Element::new("age", ElementKind::Text);
        element.as_text_mut().unwrap().text_wrap_length = json!(true);
        assert_eq!(
            element.validate(),
            Err(FormError::InvalidWrapLength("age".to_string()))
        );

        let mut element = Element::new("age", ElementKind::Text);
        element.as_text_mut().unwrap().font_size = json!(false);
        element.validate().unwrap();
    }

    #[test]
    fn test_non_text_elements_never_fail() {
        let element = Element::with_value("signed", ElementKind::Checkbox, json!(true));
        element.validate().unwrap();

        let element = Element::with_value("choice", ElementKind::Radio, json!(2));
        element.validate().unwrap();

        let element = Element::new("photo", ElementKind::Image);
        element.validate().unwrap();
    }

    #[test]
    fn test_serialize_tagged() {
        let mut element = Element::with_value("age", ElementKind::Text, json!("30"));
        element.as_text_mut().unwrap().font_size = json!(14);

        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(value["type"], json!("text"));
        assert_eq!(value["name"], json!("age"));
        assert_eq!(value["fontSize"], json!(14));
    }

    #[test]
    fn test_deserialize_tagged() {
        let json = r#"{
            "type": "text",
            "name": "age",
            "value": "30",
            "textWrapLength": 10
        }"#;

        let element: Element = serde_json::from_str(json).unwrap();
        assert_eq!(element.name(), "age");
        assert_eq!(element.kind(), ElementKind::Text);
        assert_eq!(element.as_text().unwrap().text_wrap_length, json!(10));

        let json = r#"{ "type": "checkbox", "name": "signed", "value": true }"#;
        let element: Element = serde_json::from_str(json).unwrap();
        assert_eq!(element.kind(), ElementKind::Checkbox);
        assert_eq!(element.value(), &json!(true));
    }
}
