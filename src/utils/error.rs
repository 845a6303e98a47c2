//! Error handling for bibconv
//!
//! Accent and symbol resolution never fails; it degrades and records a
//! [`Loss`](crate::utils::loss::Loss) instead. The errors here come from the
//! layers around it: reading field markup, reading `.bib` entries and I/O.

/// Conversion error type
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// An opening brace that is never closed
    #[error("Parse error at offset {offset}: unbalanced `{{`")]
    UnbalancedBrace { offset: usize },
    /// A closing brace without an opening one
    #[error("Parse error at offset {offset}: unexpected `}}`")]
    UnexpectedClosingBrace { offset: usize },
    /// A BibTeX entry whose body never terminates
    #[error("Parse error: entry `{key}` is not terminated")]
    UnterminatedEntry { key: String },
    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
