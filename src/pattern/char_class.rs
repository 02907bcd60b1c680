//! Character classes and their rendered pattern text.

use phf::{Map, phf_map};

/// A symbolic character class.
///
/// Every variant renders through an exhaustive `match`, so a new class
/// cannot be added without giving it pattern text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Digit,
    NotDigit,
    HexDigit,
    WordChar,
    NotWordChar,
    Whitespace,
    NotWhitespace,
    AlphaUpper,
    AlphaLower,
    Alpha,
    AlphaNumeric,
    WordBoundary,
    NotWordBoundary,
    Any,
}

/// Recipe names for each class. Please keep sorted alphabetically.
const NAME_TO_CLASS_MAP: Map<&'static str, CharClass> = phf_map! {
    "alpha" => CharClass::Alpha,
    "alpha-lower" => CharClass::AlphaLower,
    "alpha-upper" => CharClass::AlphaUpper,
    "alphanumeric" => CharClass::AlphaNumeric,
    "any" => CharClass::Any,
    "digit" => CharClass::Digit,
    "hex-digit" => CharClass::HexDigit,
    "not-digit" => CharClass::NotDigit,
    "not-whitespace" => CharClass::NotWhitespace,
    "not-word-boundary" => CharClass::NotWordBoundary,
    "not-word-char" => CharClass::NotWordChar,
    "whitespace" => CharClass::Whitespace,
    "word-boundary" => CharClass::WordBoundary,
    "word-char" => CharClass::WordChar,
};

impl CharClass {
    /// Pattern text when the class stands on its own.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Digit => r"\d",
            Self::NotDigit => r"\D",
            Self::HexDigit => "[0-9A-Fa-f]",
            Self::WordChar => r"\w",
            Self::NotWordChar => r"\W",
            Self::Whitespace => r"\s",
            Self::NotWhitespace => r"\S",
            Self::AlphaUpper => "[A-Z]",
            Self::AlphaLower => "[a-z]",
            Self::Alpha => "[A-Za-z]",
            Self::AlphaNumeric => "[A-Za-z0-9]",
            Self::WordBoundary => r"\b",
            Self::NotWordBoundary => r"\B",
            Self::Any => ".",
        }
    }

    /// Pattern text when spliced into a bracket expression with other members.
    ///
    /// Bracketed classes give only their interior. Returns `None` for classes
    /// that do not denote a set of characters inside brackets.
    pub fn set_member(self) -> Option<&'static str> {
        match self {
            Self::WordBoundary | Self::NotWordBoundary | Self::Any => None,
            _ => {
                let text = self.pattern();
                Some(
                    text.strip_prefix('[')
                        .and_then(|t| t.strip_suffix(']'))
                        .unwrap_or(text),
                )
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Digit => "digit",
            Self::NotDigit => "not-digit",
            Self::HexDigit => "hex-digit",
            Self::WordChar => "word-char",
            Self::NotWordChar => "not-word-char",
            Self::Whitespace => "whitespace",
            Self::NotWhitespace => "not-whitespace",
            Self::AlphaUpper => "alpha-upper",
            Self::AlphaLower => "alpha-lower",
            Self::Alpha => "alpha",
            Self::AlphaNumeric => "alphanumeric",
            Self::WordBoundary => "word-boundary",
            Self::NotWordBoundary => "not-word-boundary",
            Self::Any => "any",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        NAME_TO_CLASS_MAP.get(name).copied()
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
