//! A fluent builder for regular expressions.
//!
//! Patterns are assembled from named operations instead of hand-written
//! syntax, then compiled with `fancy_regex`.
//!
//! # Example
//!
//! ```rust
//! use fluent_pattern::{PatternBuilder, Scope};
//!
//! let mut builder = PatternBuilder::new(Scope::Anywhere);
//! builder
//!     .literal("c")
//!     .not()
//!     .any_of_chars(['a', 'o'], &[])
//!     .unwrap()
//!     .literal("t");
//!
//! assert_eq!(builder.to_string(), "(?:c)[^ao](?:t)");
//!
//! let regex = builder.compile().unwrap();
//! assert!(regex.is_match("cut").unwrap());
//! assert!(!regex.is_match("cat").unwrap());
//! ```

mod build_error;
mod one_shot;
pub mod pattern;
pub mod recipe;

pub use build_error::BuildError;
pub use one_shot::OneShotFlag;
pub use pattern::{Bounds, CharClass, CompileOptions, PatternBuilder, Repeats, Scope};
