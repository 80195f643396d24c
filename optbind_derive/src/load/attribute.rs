use crate::load::ATTRIBUTE;
use crate::model::{DeriveValue, IntermediateAttributes};
use quote::{quote, ToTokens};
use std::collections::{HashMap, HashSet};

impl TryFrom<&[syn::Attribute]> for IntermediateAttributes {
    type Error = syn::Error;

    /// Merge every `#[optbind(..)]` attribute, ignoring all others.
    fn try_from(value: &[syn::Attribute]) -> Result<Self, Self::Error> {
        let mut attributes = IntermediateAttributes::default();

        for attribute in value {
            if attribute.path().is_ident(ATTRIBUTE) {
                let IntermediateAttributes { singletons, pairs } =
                    IntermediateAttributes::try_from(attribute)?;
                attributes.singletons.extend(singletons);

                for (key, values) in pairs {
                    attributes.pairs.entry(key).or_default().extend(values);
                }
            }
        }

        Ok(attributes)
    }
}

impl TryFrom<&syn::Attribute> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let expressions = value.parse_args_with(attributes_parser)?;
        let mut singletons = HashSet::default();
        let mut pairs: HashMap<String, Vec<DeriveValue>> = HashMap::default();

        for expression in expressions {
            match expression {
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream();
                    let values = pairs.entry(left.to_string()).or_default();
                    values.push(DeriveValue {
                        tokens: assignment.right.to_token_stream(),
                    });
                }
                syn::Expr::Path(path) => match path.path.get_ident() {
                    Some(ident) => {
                        singletons.insert(ident.to_string());
                    }
                    None => return Err(unparseable(&path)),
                },
                _ => return Err(unparseable(expression)),
            };
        }

        Ok(Self { singletons, pairs })
    }
}

fn unparseable(expression: impl ToTokens) -> syn::Error {
    let tts = expression.to_token_stream();
    let expression_string = quote! {
        #tts
    };
    syn::Error::new_spanned(
        tts,
        format!("Invalid - unparseable attribute `{expression_string}`."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Literal;
    use syn::parse_quote;

    #[test]
    fn construct_intermediate_attributes_empty() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[optbind()]
        };

        // Execute
        let attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Verify
        assert_eq!(attributes, IntermediateAttributes::default());
    }

    #[test]
    fn construct_intermediate_attributes() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[optbind(explicit, name = "abc", name = "a", parse = my::parse)]
        };

        // Execute
        let attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Verify
        assert_eq!(
            attributes,
            IntermediateAttributes {
                singletons: HashSet::from(["explicit".to_string()]),
                pairs: HashMap::from([
                    (
                        "name".to_string(),
                        vec![
                            DeriveValue {
                                tokens: Literal::string("abc").into_token_stream(),
                            },
                            DeriveValue {
                                tokens: Literal::string("a").into_token_stream(),
                            },
                        ]
                    ),
                    (
                        "parse".to_string(),
                        vec![DeriveValue {
                            tokens: quote! { my::parse },
                        }]
                    ),
                ])
            }
        );
    }

    #[test]
    fn construct_intermediate_attributes_merged() {
        // Setup
        let attributes: Vec<syn::Attribute> = vec![
            parse_quote! { #[optbind(name = "abc")] },
            parse_quote! { #[doc = "ignored"] },
            parse_quote! { #[optbind(explicit, name = "a")] },
        ];

        // Execute
        let attributes = IntermediateAttributes::try_from(attributes.as_slice()).unwrap();

        // Verify
        assert_eq!(
            attributes.singletons,
            HashSet::from(["explicit".to_string()])
        );
        assert_eq!(attributes.pairs.len(), 1);
        assert_eq!(attributes.pairs["name"].len(), 2);
    }

    #[test]
    fn construct_intermediate_attributes_no_arguments() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[optbind]
        };

        // Execute
        let result = IntermediateAttributes::try_from(&attribute);

        // Verify
        assert!(result.is_err());
    }

    #[test]
    fn construct_intermediate_attributes_invalid_expression() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[optbind(a::b)]
        };

        // Execute
        let error = IntermediateAttributes::try_from(&attribute).unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "Invalid - unparseable attribute `a :: b`."
        );
    }
}
