use crate::model::{DeriveChoices, DeriveVariant};
use crate::MACRO_CHOICES;
use syn::ext::IdentExt;

impl TryFrom<syn::DeriveInput> for DeriveChoices {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let enum_name = &value.ident;

        if !value.generics.params.is_empty() {
            return Err(syn::Error::new(
                enum_name.span(),
                format!("Invalid - {MACRO_CHOICES} does not apply to generic data structures."),
            ));
        }

        match &value.data {
            syn::Data::Enum(de) => {
                let variants = de
                    .variants
                    .iter()
                    .map(DeriveVariant::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(DeriveChoices {
                    enum_name: enum_name.clone(),
                    variants,
                })
            }
            _ => Err(syn::Error::new(
                enum_name.span(),
                format!("Invalid - {MACRO_CHOICES} only applies to 'enum' data structures."),
            )),
        }
    }
}

impl TryFrom<&syn::Variant> for DeriveVariant {
    type Error = syn::Error;

    fn try_from(value: &syn::Variant) -> Result<Self, Self::Error> {
        let variant_name = value.ident.clone();

        match &value.fields {
            syn::Fields::Unit => Ok(DeriveVariant {
                name: variant_name.unraw().to_string(),
                variant_name,
            }),
            _ => Err(syn::Error::new(
                variant_name.span(),
                format!("Invalid - {MACRO_CHOICES} variant `{variant_name}` must be a unit variant."),
            )),
        }
    }
}
