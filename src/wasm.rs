//! WASM bindings for bibconv
//!
//! This module provides JavaScript-accessible functions for field conversion.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

/// Field conversion options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConvertOptions {
    /// Apply sentence capitalization
    #[serde(default)]
    pub capitalize: bool,
    /// Noun mode: lowercase first, capitalize after hyphens
    #[serde(default)]
    pub is_noun: bool,
    /// The field text begins a sentence
    #[serde(default = "default_true")]
    pub at_start: bool,
}

#[cfg(feature = "wasm")]
impl Default for FieldConvertOptions {
    fn default() -> Self {
        Self {
            capitalize: false,
            is_noun: false,
            at_start: true,
        }
    }
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

/// Conversion result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// The converted output
    pub output: String,
    /// Whether the markup could be read
    pub success: bool,
    /// Error message if the markup could not be read
    pub error: Option<String>,
    /// Number of escapes that could not be converted exactly
    pub lossy: usize,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert one BibTeX field value to plain text
///
/// # Arguments
/// * `input` - Field markup (without the outer braces or quotes)
/// * `options` - `{ capitalize, isNoun, atStart }`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "convertField")]
pub fn convert_field_wasm(input: &str, options: JsValue) -> JsValue {
    let opts: FieldConvertOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();

    let field_opts = crate::FieldOptions {
        capitalize: opts.capitalize,
        is_noun: opts.is_noun,
        at_start: opts.at_start,
    };

    let result = match crate::convert_field(input, &field_opts) {
        Ok(field) => ConvertResult {
            lossy: field.loss.count(),
            output: field.text,
            success: true,
            error: None,
        },
        Err(e) => ConvertResult {
            output: String::new(),
            success: false,
            error: Some(e.to_string()),
            lossy: 0,
        },
    };

    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Capitalize already converted text
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "capitalize")]
pub fn capitalize_wasm(text: &str, is_noun: bool, at_start: bool) -> String {
    let mut text = text.to_string();
    crate::capitalize(&mut text, is_noun, at_start);
    text
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
