//! Data layer - Static mappings
//!
//! This module contains the static tables used to turn BibTeX escapes into text:
//! - Diacritic classes for accent commands
//! - Named symbol commands

pub mod accents;
pub mod symbols;

// Re-export commonly used items
pub use accents::DiacriticClass;
pub use symbols::{lookup_symbol, SYMBOL_COMMANDS};
