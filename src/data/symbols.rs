//! Named symbol commands
//!
//! Commands that stand for a single glyph or short string, such as `\ss` or
//! `\guillemotleft`. Lookup is exact and case-sensitive: `\AE` and `\ae` are
//! different entries.

use phf::phf_map;

/// Command name (without backslash) to replacement text
pub static SYMBOL_COMMANDS: phf::Map<&'static str, &'static str> = phf_map! {
    "backslash" => "\\",
    "S" => "\u{00A7}",     // §
    "ss" => "\u{00DF}",    // ß
    "DH" => "\u{00D0}",    // Ð
    "dh" => "\u{00F0}",    // ð
    "AE" => "\u{00C6}",    // Æ
    "ae" => "\u{00E6}",    // æ
    "O" => "\u{00D8}",     // Ø
    "o" => "\u{00F8}",     // ø
    "TH" => "\u{00DE}",    // Þ
    "th" => "\u{00FE}",    // þ
    "aa" => "\u{00E5}",    // å
    "AA" => "\u{00C5}",    // Å

    // Quotes
    "guillemotleft" => "\u{00AB}",
    "guillemotright" => "\u{00BB}",
    "flqq" => "\u{00AB}",
    "frqq" => "\u{00BB}",
    "guilsingleft" => "<",
    "guilsingright" => ">",

    // Punctuation and signs
    "textquestiondown" => "\u{00BF}",
    "textexclamdown" => "\u{00A1}",
    "copyright" => "\u{00A9}",
    "pound" => "\u{00A3}",
    "neg" => "\u{00AC}",
    "cdotp" => "\u{00B7}",

    // Letters outside Latin-1
    "oe" => "\u{0153}",    // œ
    "OE" => "\u{0152}",    // Œ
    "l" => "\u{0142}",     // ł
    "L" => "\u{0141}",     // Ł
    "dj" => "\u{0111}",    // đ
    "DJ" => "\u{0110}",    // Đ
    "ng" => "\u{014B}",    // ŋ
    "NG" => "\u{014A}",    // Ŋ
};

/// Look up a symbol command by name
pub fn lookup_symbol(name: &str) -> Option<&'static str> {
    SYMBOL_COMMANDS.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(lookup_symbol("AE"), Some("Æ"));
        assert_eq!(lookup_symbol("ae"), Some("æ"));
        assert_eq!(lookup_symbol("Ae"), None);
    }

    #[test]
    fn test_lookup_quotes() {
        assert_eq!(lookup_symbol("guillemotleft"), lookup_symbol("flqq"));
        assert_eq!(lookup_symbol("guillemotright"), Some("»"));
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(lookup_symbol("textit"), None);
        assert_eq!(lookup_symbol(""), None);
    }
}
