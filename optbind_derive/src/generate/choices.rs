use crate::model::{DeriveChoices, DeriveVariant};
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;

impl TryFrom<DeriveChoices> for TokenStream2 {
    type Error = syn::Error;

    fn try_from(value: DeriveChoices) -> Result<Self, Self::Error> {
        let DeriveChoices {
            enum_name,
            variants,
        } = value;
        let names = variants.iter().map(|v| v.name.as_str()).collect::<Vec<_>>();
        let arms = variants
            .iter()
            .enumerate()
            .map(|(index, DeriveVariant { variant_name, .. })| {
                let index = Literal::usize_unsuffixed(index);
                quote! {
                    #index => ::std::result::Result::Ok(Self::#variant_name),
                }
            })
            .collect::<Vec<_>>();

        Ok(quote! {
            impl ::optbind::Bindable for #enum_name {
                fn semantic_type() -> ::optbind::SemanticType {
                    ::optbind::SemanticType::Enum(&[ #( #names ),* ])
                }

                fn from_value(value: ::optbind::TypedValue) -> ::std::result::Result<Self, ::optbind::TypedValue> {
                    match value {
                        ::optbind::TypedValue::Enum(member) => match member.index {
                            #( #arms )*
                            _ => ::std::result::Result::Err(::optbind::TypedValue::Enum(member)),
                        },
                        other => ::std::result::Result::Err(other),
                    }
                }
            }
        })
    }
}
