//! Derive macros for `optbind`.
//! See [documentation root](https://docs.rs/optbind/latest/optbind/index.html) for full details.
extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::{DeriveChoices, DeriveOptions};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

pub(crate) const MACRO_OPTIONS: &str = "Options";
pub(crate) const MACRO_CHOICES: &str = "Choices";

/// Derive `optbind::Options` on a struct with named fields.
///
/// Each field (other than `#[optbind(positionals)]`) becomes an option, in field order.
/// Field attributes:
/// * `#[optbind(name = "..")]`: an option name; single characters are short, otherwise long (repeatable).
/// * `#[optbind(short = '.')]`: the short name.
/// * `#[optbind(default = "..")]`: a literal default, coerced as though it were supplied.
/// * `#[optbind(explicit)]`: a `bool` taking a `true`/`false` value, rather than a flag.
/// * `#[optbind(parse = path)]`: a custom coercion `fn(&str, &str, &mut Problems) -> Option<T>`.
/// * `#[optbind(positionals)]`: the `Vec<String>` receiving the positional arguments.
#[proc_macro_derive(Options, attributes(optbind))]
pub fn options(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);
    DeriveOptions::try_from(derive_input)
        .and_then(TokenStream2::try_from)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive `optbind::Bindable` on a unit-only enum, matching its variant names case-insensitively.
#[proc_macro_derive(Choices)]
pub fn choices(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);
    DeriveChoices::try_from(derive_input)
        .and_then(TokenStream2::try_from)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
