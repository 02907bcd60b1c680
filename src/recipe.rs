//! Line-oriented recipes for building patterns from text.
//!
//! Each non-blank line holds one operation word followed by its argument.
//! Lines starting with `#` are comments.
//!
//! ```text
//! # CREATE TABLE [dbo.]name
//! words CREATE TABLE
//! class whitespace
//! repeat +
//! literal dbo.
//! repeat ?
//! set alpha word-char
//! repeat +
//! capture table
//! ```
//!
//! The operation word ends at the first whitespace character; for `literal`,
//! `words`, `raw` and `chars` everything after it is the argument, verbatim.
//!
//! `define NAME [SCOPE]` ... `end` records a named sub-pattern for use by
//! `include`, `alt` and `group NAME [CAPTURE-NAME]`.

use std::collections::HashMap;

use anyhow::{Context, Result, anyhow, bail};
use phf::{Map, phf_map};

use crate::pattern::{CharClass, PatternBuilder, Repeats, Scope};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Literal,
    Words,
    Raw,
    Class,
    AnyOf,
    Chars,
    Set,
    Include,
    Alt,
    Group,
    Not,
    Capture,
    Repeat,
    Define,
    End,
}

/// What follows the operation word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arg {
    /// Nothing.
    Empty,
    /// The rest of the line, verbatim.
    Text,
    /// Exactly one word.
    Word,
    /// Zero or one word.
    OptionalWord,
    /// One or two words.
    WordAndOptional,
    /// One or more words.
    Words,
}

struct OpInfo {
    op: Op,
    arg: Arg,
}

/// Map of operation names to their Op and argument shape.
/// Please keep names sorted alphabetically.
const NAME_TO_OP_MAP: Map<&'static str, OpInfo> = phf_map! {
    "alt" => OpInfo { op: Op::Alt, arg: Arg::Words },
    "any-of" => OpInfo { op: Op::AnyOf, arg: Arg::Words },
    "capture" => OpInfo { op: Op::Capture, arg: Arg::OptionalWord },
    "chars" => OpInfo { op: Op::Chars, arg: Arg::Text },
    "class" => OpInfo { op: Op::Class, arg: Arg::Word },
    "define" => OpInfo { op: Op::Define, arg: Arg::WordAndOptional },
    "end" => OpInfo { op: Op::End, arg: Arg::Empty },
    "group" => OpInfo { op: Op::Group, arg: Arg::WordAndOptional },
    "include" => OpInfo { op: Op::Include, arg: Arg::Word },
    "literal" => OpInfo { op: Op::Literal, arg: Arg::Text },
    "not" => OpInfo { op: Op::Not, arg: Arg::Empty },
    "raw" => OpInfo { op: Op::Raw, arg: Arg::Text },
    "repeat" => OpInfo { op: Op::Repeat, arg: Arg::Word },
    "set" => OpInfo { op: Op::Set, arg: Arg::Words },
    "words" => OpInfo { op: Op::Words, arg: Arg::Text },
};

/// Build a pattern from a recipe, anchored with `scope`.
pub fn build(input: &str, scope: Scope) -> Result<PatternBuilder> {
    let mut recipe = Recipe {
        root: PatternBuilder::new(scope),
        open: Vec::new(),
        defined: HashMap::new(),
    };
    for (index, line) in input.lines().enumerate() {
        recipe
            .apply_line(line)
            .with_context(|| format!("Line {}: {}", index + 1, line.trim()))?;
    }
    if let Some((name, _)) = recipe.open.last() {
        bail!("Definition '{}' has no matching 'end'.", name);
    }
    Ok(recipe.root)
}

struct Recipe {
    root: PatternBuilder,
    /// Definitions still being built, innermost last.
    open: Vec<(String, PatternBuilder)>,
    defined: HashMap<String, PatternBuilder>,
}

impl Recipe {
    fn apply_line(&mut self, line: &str) -> Result<()> {
        let line = line.trim_start();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }
        let (name, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));
        let info = NAME_TO_OP_MAP
            .get(name)
            .ok_or_else(|| anyhow!("Unknown operation '{}'.", name))?;
        let args = split_args(info.arg, rest)?;

        match info.op {
            Op::Define => {
                let scope = match args.get(1) {
                    Some(scope) => scope.parse()?,
                    None => Scope::default(),
                };
                self.open.push((args[0].to_string(), PatternBuilder::new(scope)));
                return Ok(());
            }
            Op::End => {
                let (name, builder) = self
                    .open
                    .pop()
                    .ok_or_else(|| anyhow!("'end' without 'define'."))?;
                if self.defined.contains_key(&name) {
                    bail!("Pattern '{}' is already defined.", name);
                }
                self.defined.insert(name, builder);
                return Ok(());
            }
            _ => {}
        }

        let Self {
            root,
            open,
            defined,
        } = self;
        let defined = &*defined;
        let target = match open.last_mut() {
            Some((_, builder)) => builder,
            None => root,
        };

        match info.op {
            Op::Literal => {
                target.literal(rest);
            }
            Op::Words => {
                target.words(rest);
            }
            Op::Raw => {
                target.raw(rest);
            }
            Op::Class => {
                target.char_class(class_from_name(args[0])?);
            }
            Op::AnyOf => {
                target.any_of_strings(&args);
            }
            Op::Chars => {
                target.any_of_chars(rest.chars(), &[])?;
            }
            Op::Set => {
                let classes: Vec<CharClass> = args
                    .iter()
                    .map(|name| class_from_name(name))
                    .collect::<Result<_>>()?;
                target.any_of_chars(std::iter::empty::<char>(), &classes)?;
            }
            Op::Include => {
                target.include(lookup(defined, args[0])?);
            }
            Op::Alt => {
                let builders: Vec<&PatternBuilder> = args
                    .iter()
                    .map(|name| lookup(defined, name))
                    .collect::<Result<_>>()?;
                target.any_of(builders);
            }
            Op::Group => {
                let other = lookup(defined, args[0])?;
                match args.get(1) {
                    Some(name) => target.capture_group_named(other, name),
                    None => target.capture_group(other),
                };
            }
            Op::Not => {
                target.not();
            }
            Op::Capture => match args.first() {
                Some(name) => {
                    target.capture_named(name)?;
                }
                None => {
                    target.capture()?;
                }
            },
            Op::Repeat => apply_repeat(target, args[0])?,
            Op::Define | Op::End => unreachable!("handled above"),
        }
        Ok(())
    }
}

/// Check the argument count for `arg` and split `rest` into words.
fn split_args(arg: Arg, rest: &str) -> Result<Vec<&str>> {
    if arg == Arg::Text {
        return Ok(Vec::new());
    }
    let words: Vec<&str> = rest.split_whitespace().collect();
    let allowed = match arg {
        Arg::Empty => 0..=0,
        Arg::Word => 1..=1,
        Arg::OptionalWord => 0..=1,
        Arg::WordAndOptional => 1..=2,
        Arg::Words => 1..=usize::MAX,
        Arg::Text => unreachable!(),
    };
    if !allowed.contains(&words.len()) {
        bail!("Wrong number of arguments.");
    }
    Ok(words)
}

fn lookup<'a>(
    defined: &'a HashMap<String, PatternBuilder>,
    name: &str,
) -> Result<&'a PatternBuilder> {
    defined
        .get(name)
        .ok_or_else(|| anyhow!("Pattern '{}' is not defined.", name))
}

fn class_from_name(name: &str) -> Result<CharClass> {
    CharClass::from_name(name).ok_or_else(|| anyhow!("Unknown character class '{}'.", name))
}

/// Apply `?`, `*`, `1`, `+`, or a bounded form `N`, `N,`, `,M`, `N,M`,
/// optionally followed by `?` for a lazy repeat.
fn apply_repeat(target: &mut PatternBuilder, text: &str) -> Result<()> {
    let repeats = match text {
        "?" => Some(Repeats::ZeroOrOne),
        "*" => Some(Repeats::ZeroOrMore),
        "1" => Some(Repeats::One),
        "+" => Some(Repeats::OneOrMore),
        _ => None,
    };
    if let Some(repeats) = repeats {
        target.repeat(repeats)?;
        return Ok(());
    }

    let (bounds, greedy) = match text.strip_suffix('?') {
        Some(bounds) => (bounds, false),
        None => (text, true),
    };
    let (min, max) = match bounds.split_once(',') {
        Some((min, max)) => (parse_bound(min)?, parse_bound(max)?),
        None => {
            let n = parse_bound(bounds)?;
            (n, n)
        }
    };
    target.repeat_range(min, max, greedy)?;
    Ok(())
}

fn parse_bound(text: &str) -> Result<Option<usize>> {
    if text.is_empty() {
        return Ok(None);
    }
    text.parse()
        .map(Some)
        .with_context(|| format!("Invalid repeat count '{}'.", text))
}
