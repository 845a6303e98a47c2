//! Diacritic tables
//!
//! Each accent command (`\'`, `` \` ``, `\^`, `\"`, `\~`, `\c`) selects a
//! [`DiacriticClass`]. A class maps a base letter to its precomposed Latin-1
//! form. Letters outside a class have no mapping and are reported as lossy by
//! the converter.

use phf::phf_map;

/// The six accent classes understood by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiacriticClass {
    /// `\'`
    Acute,
    /// `` \` ``
    Grave,
    /// `\^`
    Circumflex,
    /// `\"`
    Diaeresis,
    /// `\c`
    Cedilla,
    /// `\~`
    Tilde,
}

static ACUTE: phf::Map<char, char> = phf_map! {
    'A' => 'Á', 'E' => 'É', 'I' => 'Í', 'O' => 'Ó', 'U' => 'Ú', 'Y' => 'Ý',
    'a' => 'á', 'e' => 'é', 'i' => 'í', 'o' => 'ó', 'u' => 'ú', 'y' => 'ý',
};

static GRAVE: phf::Map<char, char> = phf_map! {
    'A' => 'À', 'E' => 'È', 'I' => 'Ì', 'O' => 'Ò', 'U' => 'Ù',
    'a' => 'à', 'e' => 'è', 'i' => 'ì', 'o' => 'ò', 'u' => 'ù',
};

static CIRCUMFLEX: phf::Map<char, char> = phf_map! {
    'A' => 'Â', 'E' => 'Ê', 'I' => 'Î', 'O' => 'Ô', 'U' => 'Û',
    'a' => 'â', 'e' => 'ê', 'i' => 'î', 'o' => 'ô', 'u' => 'û',
};

static DIAERESIS: phf::Map<char, char> = phf_map! {
    'A' => 'Ä', 'E' => 'Ë', 'I' => 'Ï', 'O' => 'Ö', 'U' => 'Ü',
    'a' => 'ä', 'e' => 'ë', 'i' => 'ï', 'o' => 'ö', 'u' => 'ü', 'y' => 'ÿ',
};

static CEDILLA: phf::Map<char, char> = phf_map! {
    'C' => 'Ç',
    'c' => 'ç',
};

static TILDE: phf::Map<char, char> = phf_map! {
    'A' => 'Ã', 'O' => 'Õ', 'N' => 'Ñ',
    'a' => 'ã', 'o' => 'õ', 'n' => 'ñ',
};

impl DiacriticClass {
    /// All classes, in trigger order
    pub const ALL: [DiacriticClass; 6] = [
        DiacriticClass::Acute,
        DiacriticClass::Grave,
        DiacriticClass::Circumflex,
        DiacriticClass::Diaeresis,
        DiacriticClass::Cedilla,
        DiacriticClass::Tilde,
    ];

    /// Class selected by a one-character command name, if it is a trigger
    pub fn from_trigger(trigger: char) -> Option<Self> {
        match trigger {
            '\'' => Some(DiacriticClass::Acute),
            '`' => Some(DiacriticClass::Grave),
            '^' => Some(DiacriticClass::Circumflex),
            '"' => Some(DiacriticClass::Diaeresis),
            'c' => Some(DiacriticClass::Cedilla),
            '~' => Some(DiacriticClass::Tilde),
            _ => None,
        }
    }

    /// The command character that selects this class
    pub fn trigger(self) -> char {
        match self {
            DiacriticClass::Acute => '\'',
            DiacriticClass::Grave => '`',
            DiacriticClass::Circumflex => '^',
            DiacriticClass::Diaeresis => '"',
            DiacriticClass::Cedilla => 'c',
            DiacriticClass::Tilde => '~',
        }
    }

    /// Base letter to accented letter table
    pub fn table(self) -> &'static phf::Map<char, char> {
        match self {
            DiacriticClass::Acute => &ACUTE,
            DiacriticClass::Grave => &GRAVE,
            DiacriticClass::Circumflex => &CIRCUMFLEX,
            DiacriticClass::Diaeresis => &DIAERESIS,
            DiacriticClass::Cedilla => &CEDILLA,
            DiacriticClass::Tilde => &TILDE,
        }
    }

    /// Bare accent mark produced when there is no base letter
    pub fn default_glyph(self) -> Option<char> {
        match self {
            DiacriticClass::Acute => Some('\u{00B4}'),
            DiacriticClass::Diaeresis => Some('\u{00A8}'),
            DiacriticClass::Grave
            | DiacriticClass::Circumflex
            | DiacriticClass::Cedilla
            | DiacriticClass::Tilde => None,
        }
    }

    /// Map a base character (`None` for an empty base) to its accented form
    pub fn apply(self, base: Option<char>) -> Option<char> {
        match base {
            Some(c) => self.table().get(&c).copied(),
            None => self.default_glyph(),
        }
    }
}
