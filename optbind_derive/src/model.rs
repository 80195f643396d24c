use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        let st = &self.tokens.to_string();
        let ot = &other.tokens.to_string();
        st == ot
    }
}

impl Eq for DeriveValue {}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct IntermediateAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum FieldType {
    /// A `bool` (or `Option<bool>`) whose presence sets it.
    Flag { optional: bool },
    /// A `Bindable` type, coerced by its semantic type.
    Value { ty: DeriveValue, optional: bool },
    /// Any type, coerced by a user function.
    Custom {
        ty: DeriveValue,
        optional: bool,
        parse: DeriveValue,
    },
    /// The `Vec<String>` which receives the positional arguments.
    Positionals,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveField {
    pub field_name: syn::Ident,
    pub long: Option<String>,
    pub short: Option<char>,
    pub default: Option<DeriveValue>,
    pub field_type: FieldType,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveOptions {
    pub struct_name: syn::Ident,
    pub fields: Vec<DeriveField>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveChoices {
    pub enum_name: syn::Ident,
    pub variants: Vec<DeriveVariant>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveVariant {
    pub variant_name: syn::Ident,
    pub name: String,
}
