//! `optbind` binds command line tokens onto strongly-typed option structs.
//!
//! Rather than stopping at the first mistake, `optbind` scans every token and reports every problem at once.
//! Specifically, `optbind` is built around the following concerns:
//! * *Typed options*:
//! Each option has a semantic type (ex: `int`, `boolean`, an enumeration), which selects how its value is coerced.
//! The user should not call any `&str -> T` conversion functions directly.
//! * *Conventional syntax*:
//! Long options (`--name value`), short options (`-n value`), bundled short options (`-abc`), and the `--` terminator.
//! * *Accumulated problems*:
//! Unknown options, missing arguments, invalid values and missing required values are all reported together, in a stable order.
//! * *Reusable schemas*:
//! A [`Schema`] is immutable once built, and may serve any number of (concurrent) parses.
//!
//! # Usage
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/demo_mirror_d.rs")]
//! ```
//! or via builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/demo_mirror_b.rs")]
//! ```
//!
//! ```console
//! $ demo_mirror_d -v --mode MOVE --throttle 512kb a b
//! Parameters { verbose: true, mode: Move, retries: 3, throttle: Some(Throttle(512)), paths: ["a", "b"] }
//!
//! $ demo_mirror_d -vm
//! option -m must be followed immediately by an argument but none was found
//!
//! $ demo_mirror_d --frobnicate --retries many
//! invalid int value "many" for --retries
//! option --frobnicate does not exist
//! option --retries must be followed immediately by an argument but none was found
//! missing required value for mode
//! ```
//!
//! # Builder Api
//! Configure `optbind` by starting with a [`Schema::builder`] and `add`ing an [`OptionSpec`] per option.
//!
//! Each option spec specifies the following aspects:
//! * The semantic type of its value (see [`SemanticType`]), or [`OptionSpec::of`] for a [`Bindable`] Rust type.
//! * Its long name, short name, or both.
//! * Whether it is a value-less flag ([`OptionSpec::flag`], booleans only).
//! * Its fallback when not supplied ([`DefaultPolicy`]): a literal, the zero value of its type, or nothing.
//! * Whether it is required, or [`OptionSpec::optional`].
//! * A custom coercion ([`OptionSpec::coercion`]), which takes precedence over the built-in one.
//!
//! ### Token Semantics
//! Tokens are scanned left to right.
//! * `--` ends option scanning; all subsequent tokens are positional arguments, verbatim.
//! * `--NAME` activates the long option `NAME`.
//! * `-XYZ` activates each of the short options `X`, `Y`, and `Z`.
//! * Any other token is the value of the most recently activated option, if that option takes a value and has no value yet.
//! Otherwise, it is a positional argument.
//!
//! Integer values accept decimal, hexadecimal (`0x10`, `#10`) and octal (`010`) forms.
//! Enumeration values match case-insensitively.
//!
//! ### Problems
//! A parse fails with a [`ParseFailure`] holding every [`Problem`], ordered as follows:
//! 1. Invalid values, in the order they were supplied.
//! 2. Unknown options, in the order they were first seen.
//! 3. Options left without a value (including by an invalid value), in the order they were first activated.
//! 4. Invalid literal defaults, in schema order.
//! 5. Required options with no value, in schema order.
pub mod derive;

pub use optbind_core::*;
pub use optbind_derive::{Choices, Options};
