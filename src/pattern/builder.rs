//! The fluent pattern builder.
//!
//! A builder holds an ordered list of rendered fragments. Generator methods
//! append one fragment each; `capture` and `repeat` rewrite the last one in
//! place. Anchors for the [`Scope`] are only added when rendering.

use std::fmt;

use itertools::Itertools;

use crate::build_error::BuildError;
use crate::one_shot::OneShotFlag;

use super::char_class::CharClass;
use super::options::CompileOptions;
use super::quantifier::{Bounds, Repeats};
use super::scope::Scope;

/// Characters that need a backslash inside a bracket expression.
///
/// `[`, `&` and `~` are included because the host dialect reads them as
/// nested classes and set operators.
const SET_SPECIAL_CHARS: &[char] = &['\\', ']', '[', '^', '-', '&', '~'];

/// Builds a pattern string from named operations.
///
/// Every method returns the same builder, so calls chain:
///
/// ```rust
/// use fluent_pattern::{PatternBuilder, Repeats, Scope};
///
/// let mut builder = PatternBuilder::new(Scope::StartsWith);
/// builder
///     .literal("dbo.")
///     .repeat(Repeats::ZeroOrOne)
///     .unwrap();
///
/// assert_eq!(builder.to_string(), r"^(?:dbo\.)?");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatternBuilder {
    fragments: Vec<String>,
    scope: Scope,
    negate: OneShotFlag,
}

impl PatternBuilder {
    pub fn new(scope: Scope) -> Self {
        Self {
            fragments: Vec::new(),
            scope,
            negate: OneShotFlag::default(),
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Number of fragments added so far.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// True if `not()` was called and no fragment has consumed it yet.
    pub fn is_negation_pending(&self) -> bool {
        self.negate.peek()
    }

    /// Match `text` literally.
    pub fn literal(&mut self, text: &str) -> &mut Self {
        self.push_group(&regex::escape(text));
        self
    }

    /// Match `text` literally, but let each space match any run of whitespace.
    pub fn words(&mut self, text: &str) -> &mut Self {
        self.push_group(&regex::escape(text).replace(' ', r"\s+"));
        self
    }

    /// Insert `text` without escaping. The caller is responsible for its syntax.
    pub fn raw(&mut self, text: &str) -> &mut Self {
        self.push_group(text);
        self
    }

    pub fn char_class(&mut self, class: CharClass) -> &mut Self {
        self.push_group(class.pattern());
        self
    }

    /// Match any one of the given sub-patterns, tried in order.
    pub fn any_of<'a>(
        &mut self,
        builders: impl IntoIterator<Item = &'a PatternBuilder>,
    ) -> &mut Self {
        let alternation = builders.into_iter().map(PatternBuilder::render).join("|");
        self.push_group(&alternation);
        self
    }

    /// Match any one of the given literal strings.
    ///
    /// When negated the whole alternation goes inside one lookahead, so the
    /// fragment asserts that none of the strings occur here.
    pub fn any_of_strings<S: AsRef<str>>(
        &mut self,
        values: impl IntoIterator<Item = S>,
    ) -> &mut Self {
        let alternation = values
            .into_iter()
            .map(|value| regex::escape(value.as_ref()))
            .join("|");
        self.push_group(&alternation);
        self
    }

    /// Match one character from `chars` or from any of `classes`.
    ///
    /// Negation turns the bracket expression into `[^...]` rather than
    /// wrapping it in a lookahead.
    pub fn any_of_chars(
        &mut self,
        chars: impl IntoIterator<Item = char>,
        classes: &[CharClass],
    ) -> Result<&mut Self, BuildError> {
        let members: Vec<&str> = classes
            .iter()
            .map(|&class| class.set_member().ok_or(BuildError::NotASetClass(class)))
            .collect::<Result<_, _>>()?;

        let mut set = String::from("[");
        if self.negate.read() {
            set.push('^');
        }
        for ch in chars {
            if SET_SPECIAL_CHARS.contains(&ch) {
                set.push('\\');
            }
            set.push(ch);
        }
        set.extend(members);
        set.push(']');

        self.fragments.push(set);
        Ok(self)
    }

    /// Splice in the rendered text of another builder, anchors included.
    pub fn include(&mut self, other: &PatternBuilder) -> &mut Self {
        self.push_group(&other.render());
        self
    }

    /// Splice in another builder as a new capturing group.
    pub fn capture_group(&mut self, other: &PatternBuilder) -> &mut Self {
        self.push_capture(format!("({other})"));
        self
    }

    /// Splice in another builder as a new named capturing group.
    ///
    /// The name is not checked; the engine rejects a bad one at compile time.
    pub fn capture_group_named(&mut self, other: &PatternBuilder, name: &str) -> &mut Self {
        self.push_capture(format!("(?P<{name}>{other})"));
        self
    }

    /// Negate the next fragment-generating call, whatever kind it is.
    pub fn not(&mut self) -> &mut Self {
        self.negate.set();
        self
    }

    /// Wrap the most recent fragment in a numbered capturing group.
    pub fn capture(&mut self) -> Result<&mut Self, BuildError> {
        let last = self.last_fragment("capture")?;
        *last = format!("({last})");
        Ok(self)
    }

    /// Wrap the most recent fragment in a named capturing group.
    ///
    /// The name is not checked; the engine rejects a bad one at compile time.
    pub fn capture_named(&mut self, name: &str) -> Result<&mut Self, BuildError> {
        let last = self.last_fragment("capture")?;
        *last = format!("(?P<{name}>{last})");
        Ok(self)
    }

    pub fn repeat(&mut self, repeats: Repeats) -> Result<&mut Self, BuildError> {
        self.last_fragment("repeat")?.push_str(repeats.suffix());
        Ok(self)
    }

    /// Repeat the most recent fragment between `min` and `max` times.
    ///
    /// Either bound may be omitted, but not both. A non-greedy repeat matches
    /// as few times as possible.
    pub fn repeat_range(
        &mut self,
        min: Option<usize>,
        max: Option<usize>,
        greedy: bool,
    ) -> Result<&mut Self, BuildError> {
        let bounds = Bounds::new(min, max, greedy)?;
        self.last_fragment("repeat")?.push_str(&bounds.suffix());
        Ok(self)
    }

    /// The full pattern text with the scope's anchors.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn compile(&self) -> Result<fancy_regex::Regex, fancy_regex::Error> {
        fancy_regex::Regex::new(&self.render())
    }

    pub fn compile_with(
        &self,
        options: &CompileOptions,
    ) -> Result<fancy_regex::Regex, fancy_regex::Error> {
        fancy_regex::Regex::new(&format!("{}{}", options.inline_flags(), self))
    }

    /// Append `body` as a non-capturing group, or as a negative lookahead if
    /// a negation is pending.
    fn push_group(&mut self, body: &str) {
        let fragment = if self.negate.read() {
            format!("(?!{body})")
        } else {
            format!("(?:{body})")
        };
        self.fragments.push(fragment);
    }

    /// Append a capturing `group`, inside a negative lookahead if a negation
    /// is pending.
    fn push_capture(&mut self, group: String) {
        if self.negate.read() {
            self.fragments.push(format!("(?!{group})"));
        } else {
            self.fragments.push(group);
        }
    }

    fn last_fragment(&mut self, op: &'static str) -> Result<&mut String, BuildError> {
        self.fragments.last_mut().ok_or(BuildError::NoFragment(op))
    }
}

impl fmt::Display for PatternBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scope.prefix())?;
        for fragment in &self.fragments {
            f.write_str(fragment)?;
        }
        f.write_str(self.scope.suffix())
    }
}
