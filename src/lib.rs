//! # bibconv
//!
//! Turns the markup inside BibTeX field values into plain Unicode text.
//!
//! ## Features
//!
//! - **Accents**: `\"u`, `\'{e}`, `\c c`, `\~ n` and friends, with the base
//!   letter taken from whatever follows the command
//! - **Symbols**: named commands such as `\ss`, `\AE` or `\guillemotleft`
//! - **Loss tracking**: nothing aborts; unconvertible input degrades to readable
//!   text and is counted
//! - **Capitalization**: sentence rules for titles, a noun mode for
//!   organisation and place names
//! - **BibTeX reading**: entries, `@string` macros and concatenation
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Field Conversion
//!
//! ```rust
//! use bibconv::{convert_field, FieldOptions};
//!
//! let field = convert_field(r#"Universit\"at Z\"urich"#, &FieldOptions::default()).unwrap();
//! assert_eq!(field.text, "Universität Zürich");
//! assert!(!field.is_lossy());
//!
//! let title = convert_field(r"l'{\'e}t{\'e} indien", &FieldOptions::title()).unwrap();
//! assert_eq!(title.text, "L'été indien");
//! ```
//!
//! ### Command Resolution
//!
//! ```rust
//! use bibconv::{resolve, BibStruct, Loss};
//!
//! let siblings = [BibStruct::Space, BibStruct::text("n"), BibStruct::text("o")];
//! let mut cursor = siblings.iter();
//! let mut loss = Loss::new();
//!
//! assert_eq!(resolve(&BibStruct::command("~"), &mut cursor, &mut loss), "ñ");
//! assert_eq!(cursor.as_slice(), &siblings[2..]);
//! ```

/// Core conversion modules
pub mod core;

/// Data layer - static mappings
pub mod data;

/// Feature modules - field-level conversion
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core conversion functions
pub use crate::core::{parse_field, render, render_all, resolve, resolve_command, BibStruct};

// Re-export data modules
pub use data::{accents, symbols, DiacriticClass};

// Re-export feature modules
pub use features::bibtex;
pub use features::{
    capitalize, convert_field, parse_bibtex, BibEntry, Bibliography, ConvertedEntry,
    FieldOptions, FieldText,
};

// Re-export utilities
pub use utils::error::{ConversionError, ConversionResult};
pub use utils::loss::Loss;

/// Convert a field value to plain text without capitalization
///
/// Returns the text and whether anything was lost. Markup that cannot be read
/// (unbalanced braces) is returned as-is and counts as lossy.
pub fn field_to_plain(input: &str) -> (String, bool) {
    match convert_field(input, &FieldOptions::default()) {
        Ok(field) => {
            let lossy = field.is_lossy();
            (field.text, lossy)
        }
        Err(err) => {
            tracing::warn!(error = %err, "field left unconverted");
            (input.to_string(), true)
        }
    }
}
