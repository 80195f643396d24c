//! Derive Api for `optbind` configuration.
//!
//! ### Getting Started
//! Use the derive Api by instrumenting a struct `S` with `#[derive(Options)]`.
//! This implements [`Options`](../trait.Options.html) for `S`, providing `S::parse_env()` and `S::parse_tokens(..)`.
//!
//! ```no_run
#![doc = include_str!("../demos/demo_mirror_d.rs")]
//! ```
//!
//! ### Field Configuration
//! Each field becomes one option, in field order.
//! The implicit inference uses the following rules:
//! ```console
//! Type        | Option
//! -----------------------------------------------------------------
//! bool        | a flag; absent is false
//! Option<bool>| a flag; absent is None
//! T           | takes a value; absent is the zero value of T, or missing
//! Option<T>   | takes a value; absent is None
//! ```
//! where `T` is [`Bindable`](../trait.Bindable.html) (ex: `i32`, `String`, or a `#[derive(Choices)]` enum).
//! The field name is the option name: single characters are short (`-x`), otherwise long (`--name`).
//!
//! Explicit field attributes, which may be combined as necessary:
//! * `#[optbind(name = N)]` to replace the field name with the name(s) `N`.
//! May be repeated, with at most one long and one short name.
//! * `#[optbind(short = C)]` to add the short name `C` (ex: `'c'`).
//! * `#[optbind(default = L)]` to default to the literal `L`, coerced as though it were supplied.
//! * `#[optbind(explicit)]` on a `bool` field, to take a `true`/`false` value rather than being a flag.
//! * `#[optbind(parse = F)]` to coerce via the function `F: fn(&str, &str, &mut Problems) -> Option<T>`.
//! `F` receives the option as written (ex: `--name`), and the value.
//! It must report a problem when it produces `None`.
//! * `#[optbind(positionals)]` on a `Vec<String>` field, to receive the positional arguments.
//!
//! ### Choices
//! Instrument a unit-only enum with `#[derive(Choices)]` to use it as an option type.
//! Its variant names are matched case-insensitively.
//! ```
//! use optbind::{Choices, Options};
//!
//! #[derive(Debug, PartialEq, Choices)]
//! enum Level {
//!     Low,
//!     High,
//! }
//!
//! #[derive(Options)]
//! struct Parameters {
//!     level: Level,
//! }
//!
//! let parameters = Parameters::parse_tokens(&["--level", "HIGH"]).unwrap();
//! assert_eq!(parameters.level, Level::High);
//! ```
pub use optbind_derive::*;
