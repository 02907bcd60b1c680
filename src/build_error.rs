use crate::pattern::CharClass;

/// Usage errors reported by the pattern builder.
///
/// A failed operation never changes the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// `capture` or `repeat` called before any fragment was added.
    NoFragment(&'static str),
    /// `repeat_range` with neither bound.
    MissingBounds,
    /// `repeat_range` with `min > max`.
    InvalidBounds { min: usize, max: usize },
    /// A class with no bracket-expression form passed to `any_of_chars`.
    NotASetClass(CharClass),
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoFragment(op) => write!(f, "Nothing to {op}: pattern is empty"),
            Self::MissingBounds => write!(f, "Repeat needs a minimum or a maximum"),
            Self::InvalidBounds { min, max } => {
                write!(f, "Repeat minimum {min} is larger than maximum {max}")
            }
            Self::NotASetClass(class) => {
                write!(f, "Class '{class}' cannot appear in a character set")
            }
        }
    }
}

impl std::error::Error for BuildError {}
