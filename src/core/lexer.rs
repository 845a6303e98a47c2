//! Field markup lexer
//!
//! Reads the inner text of one BibTeX field value into [`BibStruct`] nodes.
//! It follows the TeX rules that matter for bibliographic text:
//! - Control words (`\ss`) are letters only and swallow following spaces
//! - Control symbols (`\"`, `\'`) are one character and swallow nothing
//! - Braces nest into groups
//! - Whitespace runs and ties (`~`) collapse into a single space node

use super::node::BibStruct;
use crate::utils::error::{ConversionError, ConversionResult};

/// Parse field markup into structure nodes
pub fn parse_field(input: &str) -> ConversionResult<Vec<BibStruct>> {
    Lexer::new(input).parse()
}

struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    /// Track if we just emitted a control word (for space swallowing)
    after_cs: bool,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Lexer {
            chars: input.char_indices().peekable(),
            after_cs: false,
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn next_char(&mut self) -> Option<char> {
        self.chars.next().map(|(_, c)| c)
    }

    fn is_blank(c: char) -> bool {
        c.is_whitespace() || c == '~'
    }

    fn skip_while(&mut self, pred: impl Fn(char) -> bool) -> bool {
        let mut skipped = false;
        while let Some(c) = self.peek_char() {
            if !pred(c) {
                break;
            }
            self.next_char();
            skipped = true;
        }
        skipped
    }

    fn parse(mut self) -> ConversionResult<Vec<BibStruct>> {
        // Each open group keeps its start offset and the nodes read so far
        let mut stack: Vec<(usize, Vec<BibStruct>)> = Vec::new();
        let mut current = Vec::new();

        while let Some(&(offset, c)) = self.chars.peek() {
            if self.after_cs {
                self.after_cs = false;
                // A tie after a control word is still a space
                if self.skip_while(char::is_whitespace) {
                    continue;
                }
            }

            match c {
                '{' => {
                    self.next_char();
                    stack.push((offset, std::mem::take(&mut current)));
                }
                '}' => {
                    self.next_char();
                    let (_, parent) = stack
                        .pop()
                        .ok_or(ConversionError::UnexpectedClosingBrace { offset })?;
                    let children = std::mem::replace(&mut current, parent);
                    current.push(BibStruct::Group(children));
                }
                '\\' => {
                    self.next_char();
                    current.push(self.read_control_seq());
                }
                c if Self::is_blank(c) => {
                    self.skip_while(Self::is_blank);
                    current.push(BibStruct::Space);
                }
                _ => current.push(self.read_text()),
            }
        }

        match stack.pop() {
            Some((offset, _)) => Err(ConversionError::UnbalancedBrace { offset }),
            None => Ok(current),
        }
    }

    /// Read a control sequence after its backslash
    fn read_control_seq(&mut self) -> BibStruct {
        match self.peek_char() {
            Some(c) if c.is_ascii_alphabetic() => {
                let mut name = String::new();
                while let Some(c) = self.peek_char() {
                    if !c.is_ascii_alphabetic() {
                        break;
                    }
                    name.push(c);
                    self.next_char();
                }
                self.after_cs = true;
                BibStruct::Command(name)
            }
            Some(c) => {
                self.next_char();
                BibStruct::Command(c.to_string())
            }
            // Lone backslash at end of input
            None => BibStruct::text("\\"),
        }
    }

    fn read_text(&mut self) -> BibStruct {
        let mut text = String::new();
        while let Some(c) = self.peek_char() {
            if matches!(c, '{' | '}' | '\\') || Self::is_blank(c) {
                break;
            }
            text.push(c);
            self.next_char();
        }
        BibStruct::Text(text)
    }
}
