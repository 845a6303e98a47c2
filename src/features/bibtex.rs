//! BibTeX file reader
//!
//! This module reads BibTeX (.bib) files into entries whose field values keep
//! their original markup, and converts those values to plain text on demand.
//! It handles:
//!
//! - Regular entries (`@article{key, ...}` and `@article(key, ...)`)
//! - Field values in braces, quotes, bare numbers and `#` concatenation
//! - `@string` macros, including the predefined month names
//! - `@preamble` (kept verbatim) and `@comment` (skipped)
//!
//! ## Example
//!
//! ```rust
//! use bibconv::bibtex::parse_bibtex;
//!
//! let bib = r#"
//! @article{erdos1935,
//!   author = {Paul Erd\H{o}s and George Szekeres},
//!   title = {a combinatorial problem in geometry},
//!   journal = {Compositio Mathematica},
//!   year = 1935
//! }
//! "#;
//!
//! let bibliography = parse_bibtex(bib).unwrap();
//! let entry = bibliography.get("erdos1935").unwrap();
//! assert_eq!(entry.entry_type, "article");
//!
//! let converted = entry.convert_all().unwrap();
//! assert_eq!(converted.fields["title"].text, "A combinatorial problem in geometry");
//! ```

use indexmap::IndexMap;
use phf::phf_map;
use std::collections::HashMap;

use crate::features::field::{convert_field, FieldOptions, FieldText};
use crate::utils::error::{ConversionError, ConversionResult};
use crate::utils::loss::Loss;

/// Month macros every BibTeX style predefines
static MONTH_MACROS: phf::Map<&'static str, &'static str> = phf_map! {
    "jan" => "January",
    "feb" => "February",
    "mar" => "March",
    "apr" => "April",
    "may" => "May",
    "jun" => "June",
    "jul" => "July",
    "aug" => "August",
    "sep" => "September",
    "oct" => "October",
    "nov" => "November",
    "dec" => "December",
};

/// A single BibTeX entry
#[derive(Debug, Clone, Default)]
pub struct BibEntry {
    /// Entry type (article, book, inproceedings, etc.)
    pub entry_type: String,
    /// Citation key
    pub key: String,
    /// Fields and their raw values, in file order
    pub fields: IndexMap<String, String>,
}

impl BibEntry {
    /// Create a new empty entry
    pub fn new(entry_type: &str, key: &str) -> Self {
        Self {
            entry_type: entry_type.to_lowercase(),
            key: key.to_string(),
            fields: IndexMap::new(),
        }
    }

    /// Get a raw field value
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(|s| s.as_str())
    }

    /// Set a raw field value
    pub fn set(&mut self, field: &str, value: &str) {
        self.fields.insert(field.to_lowercase(), value.to_string());
    }

    /// Get author field
    pub fn author(&self) -> Option<&str> {
        self.get("author")
    }

    /// Get title field
    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    /// Get year field
    pub fn year(&self) -> Option<&str> {
        self.get("year").or_else(|| self.get("date"))
    }

    /// Convert one field with the options suited to its name
    pub fn convert(&self, field: &str) -> Option<ConversionResult<FieldText>> {
        let field = field.to_lowercase();
        self.fields
            .get(&field)
            .map(|value| convert_field(value, &FieldOptions::for_field(&field)))
    }

    /// Convert every field
    pub fn convert_all(&self) -> ConversionResult<ConvertedEntry> {
        let mut converted = ConvertedEntry {
            entry_type: self.entry_type.clone(),
            key: self.key.clone(),
            fields: IndexMap::with_capacity(self.fields.len()),
            loss: Loss::new(),
        };

        for (name, value) in &self.fields {
            let field = convert_field(value, &FieldOptions::for_field(name))?;
            converted.loss.merge(&field.loss);
            converted.fields.insert(name.clone(), field);
        }

        Ok(converted)
    }
}

/// An entry whose fields have been converted to plain text
#[derive(Debug, Clone)]
pub struct ConvertedEntry {
    pub entry_type: String,
    pub key: String,
    pub fields: IndexMap<String, FieldText>,
    /// Losses of all fields together
    pub loss: Loss,
}

/// A collection of BibTeX entries
#[derive(Debug, Clone, Default)]
pub struct Bibliography {
    /// All entries keyed by citation key, in file order
    pub entries: IndexMap<String, BibEntry>,
    /// String definitions (@string{...}), keyed by lowercase name
    pub strings: HashMap<String, String>,
    /// Preamble content
    pub preamble: Vec<String>,
}

impl Bibliography {
    /// Create new empty bibliography
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry; an existing entry with the same key wins
    pub fn add_entry(&mut self, entry: BibEntry) {
        if self.entries.contains_key(&entry.key) {
            tracing::warn!(key = %entry.key, "duplicate entry, keeping the first one");
            return;
        }
        self.entries.insert(entry.key.clone(), entry);
    }

    /// Get an entry by key
    pub fn get(&self, key: &str) -> Option<&BibEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of a string macro; user definitions shadow the month names
    pub fn string(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.strings
            .get(&name)
            .map(|s| s.as_str())
            .or_else(|| MONTH_MACROS.get(name.as_str()).copied())
    }

    /// Convert every entry
    pub fn convert_all(&self) -> ConversionResult<Vec<ConvertedEntry>> {
        self.entries.values().map(BibEntry::convert_all).collect()
    }
}

/// Parse a complete BibTeX file
pub fn parse_bibtex(input: &str) -> ConversionResult<Bibliography> {
    let mut bibliography = Bibliography::new();
    let mut reader = Reader::new(input);

    while reader.skip_to(b'@') {
        reader.bump();
        reader.skip_ws();
        let entry_type = reader.read_ident().to_lowercase();
        reader.skip_ws();

        let body = match reader.peek() {
            Some(b'{') => reader.read_braced(),
            Some(b'(') => reader.read_parenthesized(),
            // Not an entry, e.g. an email address in a comment
            _ => continue,
        };
        let body = body.ok_or_else(|| ConversionError::UnterminatedEntry {
            key: format!("@{}", entry_type),
        })?;

        match entry_type.as_str() {
            "comment" => {}
            "preamble" => bibliography.preamble.push(body.trim().to_string()),
            "string" => {
                for (name, value) in Reader::new(body).read_fields(&bibliography) {
                    bibliography.strings.insert(name, value);
                }
            }
            _ => {
                let entry = read_entry(&entry_type, body, &bibliography);
                tracing::debug!(key = %entry.key, fields = entry.fields.len(), "read entry");
                bibliography.add_entry(entry);
            }
        }
    }

    Ok(bibliography)
}

fn read_entry(entry_type: &str, body: &str, bibliography: &Bibliography) -> BibEntry {
    let (key, fields) = body.split_once(',').unwrap_or((body, ""));
    let mut entry = BibEntry::new(entry_type, key.trim());
    for (name, value) in Reader::new(fields).read_fields(bibliography) {
        entry.fields.insert(name, value);
    }
    entry
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b':' | b'.' | b'+' | b'/')
}

/// Byte cursor over BibTeX source. All delimiters are ASCII, so every
/// position it stops at is a char boundary.
struct Reader<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += self.src[self.pos..]
            .chars()
            .next()
            .map_or(0, char::len_utf8);
    }

    fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Move to the next occurrence of `b`; false if there is none
    fn skip_to(&mut self, b: u8) -> bool {
        match self.src.as_bytes()[self.pos..].iter().position(|&c| c == b) {
            Some(offset) => {
                self.pos += offset;
                true
            }
            None => {
                self.pos = self.src.len();
                false
            }
        }
    }

    fn read_ident(&mut self) -> &'a str {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if is_ident_byte(b)) {
            self.pos += 1;
        }
        &self.src[start..self.pos]
    }

    /// At `{`: the content up to the matching `}`
    fn read_braced(&mut self) -> Option<&'a str> {
        let start = self.pos + 1;
        let mut depth = 0usize;
        for (i, &b) in self.src.as_bytes()[self.pos..].iter().enumerate() {
            match b {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        let end = self.pos + i;
                        self.pos = end + 1;
                        return Some(&self.src[start..end]);
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// At `(`: the content up to the `)` outside any braces
    fn read_parenthesized(&mut self) -> Option<&'a str> {
        let start = self.pos + 1;
        let mut depth = 0usize;
        for (i, &b) in self.src.as_bytes()[start..].iter().enumerate() {
            match b {
                b'{' => depth += 1,
                b'}' => depth = depth.saturating_sub(1),
                b')' if depth == 0 => {
                    let end = start + i;
                    self.pos = end + 1;
                    return Some(&self.src[start..end]);
                }
                _ => {}
            }
        }
        None
    }

    /// At `"`: the content up to the closing quote outside any braces.
    /// A quote escaped as `\"` does not close the value.
    fn read_quoted(&mut self) -> Option<&'a str> {
        let start = self.pos + 1;
        let bytes = self.src.as_bytes();
        let mut depth = 0usize;
        let mut i = start;
        while let Some(&b) = bytes.get(i) {
            match b {
                b'\\' => i += 1,
                b'{' => depth += 1,
                b'}' => depth = depth.saturating_sub(1),
                b'"' if depth == 0 => {
                    self.pos = i + 1;
                    return Some(&self.src[start..i]);
                }
                _ => {}
            }
            i += 1;
        }
        None
    }

    /// `name = value` pairs separated by commas
    fn read_fields(&mut self, bibliography: &Bibliography) -> Vec<(String, String)> {
        let mut fields = Vec::new();

        loop {
            while matches!(self.peek(), Some(b) if b.is_ascii_whitespace() || b == b',') {
                self.pos += 1;
            }
            if self.peek().is_none() {
                break;
            }

            let name = self.read_ident();
            if name.is_empty() {
                self.bump();
                continue;
            }

            self.skip_ws();
            if !self.eat(b'=') {
                tracing::warn!(field = %name, "field without a value");
                continue;
            }

            let value = self.read_value(bibliography);
            fields.push((name.to_lowercase(), value));
        }

        fields
    }

    /// A value made of parts joined with `#`
    fn read_value(&mut self, bibliography: &Bibliography) -> String {
        let mut value = String::new();

        loop {
            self.skip_ws();
            let part = match self.peek() {
                Some(b'{') => self.read_braced(),
                Some(b'"') => self.read_quoted(),
                Some(b) if b.is_ascii_digit() => Some(self.read_ident()),
                Some(b) if is_ident_byte(b) => {
                    let name = self.read_ident();
                    match bibliography.string(name) {
                        Some(expansion) => value.push_str(expansion),
                        None => {
                            tracing::warn!(name = %name, "undefined @string macro");
                            value.push_str(name);
                        }
                    }
                    Some("")
                }
                _ => None,
            };

            match part {
                Some(part) => value.push_str(part),
                None => {
                    // Unterminated part: nothing sensible follows
                    if matches!(self.peek(), Some(b'{') | Some(b'"')) {
                        self.pos = self.src.len();
                    }
                    break;
                }
            }

            self.skip_ws();
            if !self.eat(b'#') {
                break;
            }
        }

        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_simple_entry() {
        let bib = r#"
@article{einstein1905,
  author = {Albert Einstein},
  title = {On the Electrodynamics of Moving Bodies},
  journal = {Annalen der Physik},
  year = {1905}
}
"#;
        let bibliography = parse_bibtex(bib).unwrap();
        assert_eq!(bibliography.len(), 1);

        let entry = bibliography.get("einstein1905").unwrap();
        assert_eq!(entry.entry_type, "article");
        assert_eq!(entry.author(), Some("Albert Einstein"));
        assert_eq!(
            entry.title(),
            Some("On the Electrodynamics of Moving Bodies")
        );
        assert_eq!(entry.year(), Some("1905"));
        assert_eq!(
            entry.fields.keys().collect::<Vec<_>>(),
            vec!["author", "title", "journal", "year"]
        );
    }

    #[test]
    fn test_parse_multiple_entries() {
        let bib = r#"
@article{paper1, author = {A}, title = {B}, year = {2020}}
@book(book1, author = {C}, title = {D}, year = 2021)
"#;
        let bibliography = parse_bibtex(bib).unwrap();
        assert_eq!(bibliography.len(), 2);
        assert_eq!(bibliography.get("book1").unwrap().year(), Some("2021"));
    }

    #[test]
    fn test_nested_braces_kept_raw() {
        let bib = r#"@misc{k, title = {The {DNA} of M\"{u}ller}}"#;
        let bibliography = parse_bibtex(bib).unwrap();
        assert_eq!(
            bibliography.get("k").unwrap().title(),
            Some(r#"The {DNA} of M\"{u}ller"#)
        );
    }

    #[test]
    fn test_quoted_values() {
        let bib = r#"
@article{test,
  author = "M\"uller, J{\"o}rg",
  title = "A {"}Quoted{"} Title",
  year = "2023"
}
"#;
        let bibliography = parse_bibtex(bib).unwrap();
        let entry = bibliography.get("test").unwrap();
        assert_eq!(entry.author(), Some(r#"M\"uller, J{\"o}rg"#));
        assert_eq!(entry.title(), Some(r#"A {"}Quoted{"} Title"#));
    }

    #[test]
    fn test_concatenation_and_strings() {
        let bib = r#"
@string{ acm = "ACM" }
@article{test,
  author = {John} # { Doe},
  publisher = acm # { Press},
  month = mar,
  note = undefined
}
"#;
        let bibliography = parse_bibtex(bib).unwrap();
        let entry = bibliography.get("test").unwrap();
        assert_eq!(entry.author(), Some("John Doe"));
        assert_eq!(entry.get("publisher"), Some("ACM Press"));
        assert_eq!(entry.get("month"), Some("March"));
        assert_eq!(entry.get("note"), Some("undefined"));
    }

    #[test]
    fn test_comment_and_preamble() {
        let bib = r#"
@comment{ ignore @article{nope, title = {x}} }
@preamble{ "\newcommand{\noop}[1]{}" }
Some stray text with mail@example.org
@book{real, title = {Yes}}
"#;
        let bibliography = parse_bibtex(bib).unwrap();
        assert_eq!(bibliography.len(), 1);
        assert!(bibliography.get("real").is_some());
        assert_eq!(
            bibliography.preamble,
            vec![r#""\newcommand{\noop}[1]{}""#.to_string()]
        );
    }

    #[test]
    fn test_unterminated_entry() {
        let err = parse_bibtex("@article{broken, title = {x}").unwrap_err();
        assert!(matches!(
            err,
            ConversionError::UnterminatedEntry { ref key } if key == "@article"
        ));
    }

    #[test]
    fn test_duplicate_keys_keep_first() {
        let bib = "@misc{a, title = {first}}\n@misc{a, title = {second}}";
        let bibliography = parse_bibtex(bib).unwrap();
        assert_eq!(bibliography.len(), 1);
        assert_eq!(bibliography.get("a").unwrap().title(), Some("first"));
    }

    #[test]
    fn test_convert_entry_fields() {
        let bib = r#"
@book{k,
  author = {Fran\c{c}ois Gr\`y},
  title = {{\'e}tudes sur la lumi\`ere},
  publisher = {GAUTHIER-VILLARS}
}
"#;
        let bibliography = parse_bibtex(bib).unwrap();
        let entry = bibliography.get("k").unwrap();
        let converted = entry.convert_all().unwrap();

        assert_eq!(converted.fields["author"].text, "François Gry");
        assert_eq!(converted.fields["title"].text, "Études sur la lumière");
        assert_eq!(converted.fields["publisher"].text, "Gauthier-Villars");
        assert_eq!(converted.loss.count(), 1);

        let title = entry.convert("TITLE").unwrap().unwrap();
        assert_eq!(title.text, "Études sur la lumière");
        assert!(entry.convert("isbn").is_none());
    }
}
