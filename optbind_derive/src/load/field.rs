use crate::load::incompatible_error;
use crate::model::{DeriveField, DeriveValue, FieldType, IntermediateAttributes};
use quote::{quote, ToTokens};
use syn::ext::IdentExt;

const SINGLETONS: [&str; 2] = ["explicit", "positionals"];
const PAIRS: [&str; 4] = ["name", "short", "default", "parse"];

impl TryFrom<&syn::Field> for DeriveField {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let attributes = IntermediateAttributes::try_from(value.attrs.as_slice())?;
        let field_name = match &value.ident {
            Some(ident) => ident.clone(),
            None => {
                return Err(syn::Error::new_spanned(
                    value,
                    "Invalid - Options fields must be named.",
                ))
            }
        };

        for singleton in &attributes.singletons {
            if !SINGLETONS.contains(&singleton.as_str()) {
                return Err(unknown_error(&field_name, singleton));
            }
        }

        for key in attributes.pairs.keys() {
            if !PAIRS.contains(&key.as_str()) {
                return Err(unknown_error(&field_name, format!("{key} = ..")));
            }
        }

        let explicit = attributes.singletons.contains("explicit");
        let positionals = attributes.singletons.contains("positionals");
        let names = match attributes.pairs.get("name") {
            Some(values) => values
                .iter()
                .map(|value| literal::<syn::LitStr>(&field_name, "name", value).map(|l| l.value()))
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::default(),
        };
        let short = match single(&field_name, &attributes, "short")? {
            Some(value) => Some(literal::<syn::LitChar>(&field_name, "short", &value)?.value()),
            None => None,
        };
        let default = single(&field_name, &attributes, "default")?;
        let parse = single(&field_name, &attributes, "parse")?;

        if positionals {
            disallow(
                &field_name,
                "#[optbind(positionals)]",
                &[
                    (explicit, "#[optbind(explicit)]"),
                    (!names.is_empty(), "#[optbind(name = ..)]"),
                    (short.is_some(), "#[optbind(short = ..)]"),
                    (default.is_some(), "#[optbind(default = ..)]"),
                    (parse.is_some(), "#[optbind(parse = ..)]"),
                ],
            )?;

            if !is_vec(&value.ty) {
                return Err(syn::Error::new(
                    field_name.span(),
                    format!("Invalid - field `{field_name}` with `#[optbind(positionals)]` must be a `Vec<String>`."),
                ));
            }

            return Ok(DeriveField {
                field_name,
                long: None,
                short: None,
                default: None,
                field_type: FieldType::Positionals,
            });
        }

        if explicit && parse.is_some() {
            return Err(incompatible_error(
                &field_name,
                "#[optbind(explicit)]",
                "#[optbind(parse = ..)]",
            ));
        }

        let (optional, inner) = optional_inner(&field_name, &value.ty)?;
        let field_type = match parse {
            Some(parse) => FieldType::Custom {
                ty: DeriveValue {
                    tokens: inner.to_token_stream(),
                },
                optional,
                parse,
            },
            None if is_bool(inner) && !explicit => FieldType::Flag { optional },
            None => {
                if explicit && !is_bool(inner) {
                    return Err(syn::Error::new(
                        field_name.span(),
                        format!("Invalid - field `{field_name}` cannot be `#[optbind(explicit)]` unless it is a `bool`."),
                    ));
                }

                FieldType::Value {
                    ty: DeriveValue {
                        tokens: inner.to_token_stream(),
                    },
                    optional,
                }
            }
        };
        let (long, short) = resolve_names(&field_name, names, short)?;

        Ok(DeriveField {
            field_name,
            long,
            short,
            default,
            field_type,
        })
    }
}

/// Names of a single character are short, all others long.
/// Without any `name = ..`, the field name is used.
fn resolve_names(
    field_name: &syn::Ident,
    names: Vec<String>,
    short: Option<char>,
) -> Result<(Option<String>, Option<char>), syn::Error> {
    let names = if names.is_empty() {
        vec![field_name.unraw().to_string()]
    } else {
        names
    };
    let mut long = None;
    let mut shorts: Vec<char> = short.into_iter().collect();

    for name in names {
        let mut chars = name.chars();

        match (chars.next(), chars.next()) {
            (None, _) => {
                return Err(syn::Error::new(
                    field_name.span(),
                    format!("Invalid - field `{field_name}` cannot have an empty name."),
                ));
            }
            (Some(single), None) => shorts.push(single),
            (Some(_), Some(_)) => {
                if long.replace(name).is_some() {
                    return Err(syn::Error::new(
                        field_name.span(),
                        format!("Invalid - field `{field_name}` cannot have more than one long name."),
                    ));
                }
            }
        }
    }

    if shorts.len() > 1 {
        return Err(syn::Error::new(
            field_name.span(),
            format!("Invalid - field `{field_name}` cannot have more than one short name."),
        ));
    }

    Ok((long, shorts.pop()))
}

fn single(
    field_name: &syn::Ident,
    attributes: &IntermediateAttributes,
    key: &str,
) -> Result<Option<DeriveValue>, syn::Error> {
    match attributes.pairs.get(key).map(Vec::as_slice) {
        None | Some([]) => Ok(None),
        Some([value]) => Ok(Some(value.clone())),
        Some(_) => Err(syn::Error::new(
            field_name.span(),
            format!("Invalid - field `{field_name}` cannot repeat `#[optbind({key} = ..)]`."),
        )),
    }
}

fn literal<L: syn::parse::Parse>(
    field_name: &syn::Ident,
    key: &str,
    value: &DeriveValue,
) -> Result<L, syn::Error> {
    syn::parse2::<L>(value.tokens.clone()).map_err(|_| {
        let tts = &value.tokens;
        let value_string = quote! {
            #tts
        };
        syn::Error::new(
            field_name.span(),
            format!("Invalid - field `{field_name}` expects a literal for `#[optbind({key} = ..)]`, found `{value_string}`."),
        )
    })
}

fn unknown_error(field_name: &syn::Ident, attribute: impl Into<String>) -> syn::Error {
    syn::Error::new(
        field_name.span(),
        format!(
            "Invalid - field `{field_name}` has unknown attribute `#[optbind({})]`.",
            attribute.into()
        ),
    )
}

fn disallow(
    field_name: &syn::Ident,
    antecedent: &str,
    condition_names: &[(bool, &str)],
) -> Result<(), syn::Error> {
    for (condition, name) in condition_names {
        if *condition {
            return Err(incompatible_error(field_name, antecedent, *name));
        }
    }

    Ok(())
}

fn last_segment(ty: &syn::Type) -> Option<&syn::PathSegment> {
    match ty {
        syn::Type::Path(path) if path.qself.is_none() => path.path.segments.last(),
        _ => None,
    }
}

fn is_bool(ty: &syn::Type) -> bool {
    matches!(ty, syn::Type::Path(path) if path.qself.is_none() && path.path.is_ident("bool"))
}

fn is_vec(ty: &syn::Type) -> bool {
    last_segment(ty).map_or(false, |segment| segment.ident == "Vec")
}

/// Unwrap `Option<T>` into `(true, T)`; any other type is `(false, type)`.
fn optional_inner<'a>(
    field_name: &syn::Ident,
    ty: &'a syn::Type,
) -> Result<(bool, &'a syn::Type), syn::Error> {
    match last_segment(ty) {
        Some(segment) if segment.ident == "Option" => match &segment.arguments {
            syn::PathArguments::AngleBracketed(arguments) => match arguments.args.first() {
                Some(syn::GenericArgument::Type(inner)) if arguments.args.len() == 1 => {
                    Ok((true, inner))
                }
                _ => Err(unparseable_option(field_name, ty)),
            },
            _ => Err(unparseable_option(field_name, ty)),
        },
        _ => Ok((false, ty)),
    }
}

fn unparseable_option(field_name: &syn::Ident, ty: &syn::Type) -> syn::Error {
    let tts = ty.to_token_stream();
    let type_string = quote! {
        #tts
    };
    syn::Error::new(
        field_name.span(),
        format!("Invalid - field `{field_name}` has unparseable type `{type_string}`."),
    )
}
