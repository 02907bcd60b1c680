//! Repetition suffixes appended to the last fragment of a pattern.

use crate::build_error::BuildError;

/// Unbounded repetition kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeats {
    ZeroOrOne,
    ZeroOrMore,
    /// Exactly once; renders as nothing.
    One,
    OneOrMore,
}

impl Repeats {
    pub fn suffix(self) -> &'static str {
        match self {
            Self::ZeroOrOne => "?",
            Self::ZeroOrMore => "*",
            Self::One => "",
            Self::OneOrMore => "+",
        }
    }
}

/// A validated `{min,max}` repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    kind: BoundsKind,
    greedy: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoundsKind {
    Exactly(usize),
    AtLeast(usize),
    AtMost(usize),
    Between(usize, usize),
}

impl Bounds {
    /// At least one of `min` and `max` must be given, and `min <= max`.
    pub fn new(min: Option<usize>, max: Option<usize>, greedy: bool) -> Result<Self, BuildError> {
        let kind = match (min, max) {
            (None, None) => return Err(BuildError::MissingBounds),
            (Some(min), None) => BoundsKind::AtLeast(min),
            (None, Some(max)) => BoundsKind::AtMost(max),
            (Some(min), Some(max)) if min > max => {
                return Err(BuildError::InvalidBounds { min, max });
            }
            (Some(min), Some(max)) if min == max => BoundsKind::Exactly(min),
            (Some(min), Some(max)) => BoundsKind::Between(min, max),
        };
        Ok(Self { kind, greedy })
    }

    pub fn suffix(&self) -> String {
        let bound = match self.kind {
            BoundsKind::Exactly(n) => format!("{{{n}}}"),
            BoundsKind::AtLeast(n) => format!("{{{n},}}"),
            // The host dialect has no `{,m}` form.
            BoundsKind::AtMost(m) => format!("{{0,{m}}}"),
            BoundsKind::Between(n, m) => format!("{{{n},{m}}}"),
        };
        if self.greedy { bound } else { bound + "?" }
    }
}
