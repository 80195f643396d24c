use crate::model::{DeriveField, DeriveOptions, FieldType};
use crate::MACRO_OPTIONS;
use std::collections::HashMap;

impl TryFrom<syn::DeriveInput> for DeriveOptions {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let struct_name = &value.ident;

        if !value.generics.params.is_empty() {
            return Err(syn::Error::new(
                struct_name.span(),
                format!("Invalid - {MACRO_OPTIONS} does not apply to generic data structures."),
            ));
        }

        let fields = match &value.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(fields),
                ..
            }) => fields
                .named
                .iter()
                .map(DeriveField::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Unit,
                ..
            }) => Vec::default(),
            _ => {
                return Err(syn::Error::new(
                    struct_name.span(),
                    format!("Invalid - {MACRO_OPTIONS} only applies to 'struct' data structures with named fields."),
                ));
            }
        };

        let positionals: Vec<String> = fields
            .iter()
            .filter(|f| f.field_type == FieldType::Positionals)
            .map(|f| f.field_name.to_string())
            .collect();
        if positionals.len() > 1 {
            return Err(syn::Error::new(
                struct_name.span(),
                format!("Invalid - options cannot have multiple positionals fields: {positionals:?}."),
            ));
        }

        let mut longs: HashMap<&str, &syn::Ident> = HashMap::default();
        let mut shorts: HashMap<char, &syn::Ident> = HashMap::default();

        for field in &fields {
            if let Some(long) = &field.long {
                if let Some(other) = longs.insert(long.as_str(), &field.field_name) {
                    return Err(duplicate_error(&field.field_name, format!("--{long}"), other));
                }
            }

            if let Some(short) = field.short {
                if let Some(other) = shorts.insert(short, &field.field_name) {
                    return Err(duplicate_error(&field.field_name, format!("-{short}"), other));
                }
            }
        }

        Ok(DeriveOptions {
            struct_name: struct_name.clone(),
            fields,
        })
    }
}

fn duplicate_error(field_name: &syn::Ident, option: String, other: &syn::Ident) -> syn::Error {
    syn::Error::new(
        field_name.span(),
        format!("Invalid - option `{option}` is declared by both `{other}` and `{field_name}`."),
    )
}
