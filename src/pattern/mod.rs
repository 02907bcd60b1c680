//! Pattern assembly.
//!
//! A [`PatternBuilder`] collects fragments in order and renders them as one
//! pattern string for the `fancy_regex` engine.
//!
//! | Operation        | Fragment                                       |
//! |------------------|------------------------------------------------|
//! | `literal`        | `(?:text)` with metacharacters escaped          |
//! | `words`          | As `literal`, each space becomes `\s+`          |
//! | `raw`            | `(?:text)` verbatim                             |
//! | `char_class`     | `(?:\d)`, `(?:[A-Z])`, ...                      |
//! | `any_of`         | `(?:a\|b)` of rendered builders                 |
//! | `any_of_strings` | `(?:a\|b)` of escaped strings                   |
//! | `any_of_chars`   | `[...]`                                         |
//! | `include`        | `(?:rendered)`                                  |
//! | `capture_group`  | `(rendered)`                                    |
//!
//! After `not()`, the next fragment becomes a negative lookahead `(?!...)`,
//! except `any_of_chars`, which becomes `[^...]`. `capture` and `repeat`
//! rewrite the last fragment.

mod builder;
pub mod char_class;
mod options;
pub mod quantifier;
mod scope;

pub use builder::PatternBuilder;
pub use char_class::CharClass;
pub use options::CompileOptions;
pub use quantifier::{Bounds, Repeats};
pub use scope::Scope;
