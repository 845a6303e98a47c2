//! Feature modules - Field-level conversion features
//!
//! This module contains the layers built on top of the core resolver:
//! - Title and noun capitalization
//! - Field conversion with per-field options
//! - BibTeX file reading

pub mod bibtex;
pub mod capitalize;
pub mod field;

// Re-export commonly used types
pub use bibtex::{parse_bibtex, BibEntry, Bibliography, ConvertedEntry};
pub use capitalize::capitalize;
pub use field::{convert_field, FieldOptions, FieldText};
