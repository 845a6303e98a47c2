//! Field-level conversion
//!
//! Ties the pieces together for one field value: read the markup, render it
//! to plain text, then optionally capitalize it according to the kind of field.

use crate::core::lexer::parse_field;
use crate::core::render::render_all;
use crate::features::capitalize::capitalize;
use crate::utils::error::ConversionResult;
use crate::utils::loss::Loss;

/// Options for converting one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOptions {
    /// Apply capitalization after rendering
    pub capitalize: bool,
    /// Noun mode: lowercase first, capitalize after hyphens
    pub is_noun: bool,
    /// The field text begins a sentence
    pub at_start: bool,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            capitalize: false,
            is_noun: false,
            at_start: true,
        }
    }
}

impl FieldOptions {
    /// Preset for titles: sentence capitalization, text otherwise kept
    pub fn title() -> Self {
        Self {
            capitalize: true,
            ..Default::default()
        }
    }

    /// Preset for organisation and place names
    pub fn noun() -> Self {
        Self {
            capitalize: true,
            is_noun: true,
            at_start: true,
        }
    }

    /// Options suited to a BibTeX field name
    pub fn for_field(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "title" | "booktitle" | "series" => Self::title(),
            "organization" | "institution" | "publisher" | "school" | "address"
            | "location" => Self::noun(),
            _ => Self::default(),
        }
    }
}

/// Plain text of a converted field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldText {
    /// The converted content
    pub text: String,
    /// What could not be rendered exactly
    pub loss: Loss,
}

impl FieldText {
    pub fn is_lossy(&self) -> bool {
        self.loss.is_lossy()
    }
}

/// Convert one field value to plain text
pub fn convert_field(input: &str, options: &FieldOptions) -> ConversionResult<FieldText> {
    let nodes = parse_field(input)?;
    let mut loss = Loss::new();
    let mut text = render_all(&nodes, &mut loss);

    if options.capitalize {
        capitalize(&mut text, options.is_noun, options.at_start);
    }

    Ok(FieldText { text, loss })
}
