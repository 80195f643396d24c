use crate::model::{DeriveField, DeriveOptions, DeriveValue, FieldType};
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};

impl TryFrom<DeriveOptions> for TokenStream2 {
    type Error = syn::Error;

    fn try_from(value: DeriveOptions) -> Result<Self, Self::Error> {
        let DeriveOptions {
            struct_name,
            fields,
        } = value;
        let mut specs = Vec::default();
        let mut extractions = Vec::default();
        let mut field_names = Vec::default();

        for field in fields {
            field_names.push(field.field_name.clone());
            let (spec, extraction) = field.generate();

            if let Some(spec) = spec {
                specs.push(spec);
            }

            extractions.push(extraction);
        }

        Ok(quote! {
            impl ::optbind::Options for #struct_name {
                fn schema() -> ::std::result::Result<::optbind::Schema, ::optbind::ConfigError> {
                    ::optbind::Schema::builder()
                        #( .add(#specs) )*
                        .build()
                }

                #[allow(unused_mut, unused_variables)]
                fn construct(bound: ::optbind::BoundValues) -> Self {
                    let mut extractor = bound.extractor();
                    #( #extractions )*
                    Self { #( #field_names ),* }
                }
            }
        })
    }
}

impl DeriveField {
    /// The option spec (absent for positionals), and the statement which extracts the field's value.
    fn generate(self) -> (Option<TokenStream2>, TokenStream2) {
        let DeriveField {
            field_name,
            long,
            short,
            default,
            field_type,
        } = self;
        let long = long.map(|long| quote! { .long(#long) });
        let short = short.map(|short| quote! { .short(#short) });
        let default = default.map(|DeriveValue { tokens }| quote! { .default_value(#tokens) });
        let modifiers = quote! { #long #short #default };

        match field_type {
            FieldType::Flag { optional } => {
                let (optional, extract) = extract_method(optional, "optional", "required");
                (
                    Some(quote! {
                        ::optbind::OptionSpec::of::<bool>() #modifiers .flag() #optional
                    }),
                    quote! {
                        let #field_name = extractor.#extract::<bool>();
                    },
                )
            }
            FieldType::Value { ty, optional } => {
                let ty = ty.tokens;
                let (optional, extract) = extract_method(optional, "optional", "required");
                (
                    Some(quote! {
                        ::optbind::OptionSpec::of::<#ty>() #modifiers #optional
                    }),
                    quote! {
                        let #field_name = extractor.#extract::<#ty>();
                    },
                )
            }
            FieldType::Custom {
                ty,
                optional,
                parse,
            } => {
                let ty = ty.tokens;
                let parse = parse.tokens;
                let (optional, extract) = extract_method(optional, "custom_optional", "custom");
                (
                    Some(quote! {
                        ::optbind::OptionSpec::new(::optbind::SemanticType::Custom)
                            .coercion(|option: &str, value: &str, problems: &mut ::optbind::Problems| {
                                #parse(option, value, problems).map(::optbind::TypedValue::custom::<#ty>)
                            })
                            #modifiers #optional
                    }),
                    quote! {
                        let #field_name = extractor.#extract::<#ty>();
                    },
                )
            }
            FieldType::Positionals => (
                None,
                quote! {
                    let #field_name = extractor.positionals();
                },
            ),
        }
    }
}

fn extract_method(optional: bool, when_optional: &str, otherwise: &str) -> (TokenStream2, syn::Ident) {
    if optional {
        (quote! { .optional() }, format_ident!("{when_optional}"))
    } else {
        (TokenStream2::default(), format_ident!("{otherwise}"))
    }
}
