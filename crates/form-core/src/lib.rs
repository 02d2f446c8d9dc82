//! Form Core - form field element model
//!
//! This crate provides:
//! - Element types for scanned form fields (text, checkbox, radio, ...)
//! - Validation of text rendering attributes (font size, offsets, wrap)
//! - Field-stream parsing from the template scanner
//! - Form-data application before rendering
//!
//! # Example
//!
//! ```ignore
//! use form_core::{apply_form_data, parse_field_stream};
//!
//! let mut elements = parse_field_stream(fields_json)?;
//! let data: serde_json::Value = serde_json::from_str(data_json)?;
//! apply_form_data(&mut elements, &data)?;
//! for element in &elements {
//!     element.validate()?;
//! }
//! ```

mod element;
pub mod fill;
pub mod parser;
mod value;

pub use element::{Element, ElementKind, TextElement, WidgetElement};
pub use fill::{apply_form_data, apply_form_data_with, FillOptions};
pub use parser::{build_elements, parse_field_stream, FieldDescriptor};

use thiserror::Error;

/// Errors that can occur while preparing form elements
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("font size for field '{0}' must be a number")]
    InvalidFontSize(String),

    #[error("text offset for field '{0}' must be a number")]
    InvalidTextOffset(String),

    #[error("wrap length for field '{0}' must be a whole number")]
    InvalidWrapLength(String),

    #[error("failed to parse template field stream: {0}")]
    InvalidTemplate(String),

    #[error("invalid form data: {0}")]
    InvalidFormData(String),

    #[error("simple-mode flag must be a boolean")]
    InvalidMode,
}

/// Result type for form operations
pub type Result<T> = std::result::Result<T, FormError>;
