//! Core conversion modules
//!
//! This module contains the escape-sequence machinery:
//! - `node`: structure nodes of one field value
//! - `lexer`: field markup to nodes
//! - `accents`: command resolution with sibling lookahead
//! - `render`: nodes to plain text

pub mod accents;
pub mod lexer;
pub mod node;
pub mod render;

// Re-export main types and functions
pub use accents::{resolve, resolve_command};
pub use lexer::parse_field;
pub use node::BibStruct;
pub use render::{render, render_all};
