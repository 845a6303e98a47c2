//! Structure nodes for one BibTeX field value.
//!
//! A field such as `M\"{u}ller and {\AE}sop` is read into a flat sequence of
//! nodes, with braces producing nested groups. Commands never own their
//! arguments: an accent finds its base letter among the siblings that follow
//! it.

use std::fmt;

/// A node of field markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BibStruct {
    /// A control sequence like `\ss` or `\"`.
    /// The string does NOT include the leading backslash.
    Command(String),
    /// Whitespace or a tie (`~`)
    Space,
    /// Plain characters
    Text(String),
    /// A braced group `{...}`
    Group(Vec<BibStruct>),
}

impl BibStruct {
    pub fn command(name: impl Into<String>) -> Self {
        BibStruct::Command(name.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        BibStruct::Text(text.into())
    }

    pub fn is_space(&self) -> bool {
        matches!(self, BibStruct::Space)
    }

    /// Command name, if this node is a command
    pub fn command_name(&self) -> Option<&str> {
        match self {
            BibStruct::Command(name) => Some(name),
            _ => None,
        }
    }
}

/// Re-emit the markup this node was read from (up to whitespace)
impl fmt::Display for BibStruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BibStruct::Command(name) => {
                write!(f, "\\{}", name)?;
                // Keep `\ss e` from turning into `\sse`
                if name.chars().all(|c| c.is_ascii_alphabetic()) {
                    f.write_str(" ")?;
                }
                Ok(())
            }
            BibStruct::Space => f.write_str(" "),
            BibStruct::Text(text) => f.write_str(text),
            BibStruct::Group(children) => {
                f.write_str("{")?;
                for child in children {
                    write!(f, "{}", child)?;
                }
                f.write_str("}")
            }
        }
    }
}
