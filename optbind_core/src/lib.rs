//! Core module for `optbind`.
//! See [documentation root](https://docs.rs/optbind/latest/optbind/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod binder;
pub mod coerce;
mod error;
mod model;
mod parser;

pub use api::*;
pub use error::*;
pub use model::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
