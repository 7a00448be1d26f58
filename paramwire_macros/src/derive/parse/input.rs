//! Input parsing for the `Configurable` derive.
//!
//! Gathers the struct identifier, generics, and one [`MutatorField`] per
//! configurable field, reporting every invalid field at once.

use std::collections::HashSet;

use heck::ToUpperCamelCase;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Generics, Ident};

use super::{parse_field_attrs, parse_struct_attrs};
use crate::derive::kind::{FieldShape, field_shape};

/// A field exposed through a mutator.
pub(crate) struct MutatorField {
    pub(crate) ident: Ident,
    pub(crate) mutator: String,
    pub(crate) shape: FieldShape,
}

/// Everything the generator needs from the user's struct.
pub(crate) struct ConfigurableInput {
    pub(crate) ident: Ident,
    pub(crate) generics: Generics,
    pub(crate) crate_path: Option<syn::Path>,
    pub(crate) fields: Vec<MutatorField>,
}

fn capitalise_first(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn mutator_name(ident: &Ident, rename: Option<&syn::LitStr>) -> String {
    rename.map_or_else(
        || format!("set{}", ident.unraw().to_string().to_upper_camel_case()),
        |lit| format!("set{}", capitalise_first(&lit.value())),
    )
}

fn combine(errors: &mut Option<syn::Error>, err: syn::Error) {
    match errors {
        Some(existing) => existing.combine(err),
        None => *errors = Some(err),
    }
}

/// Parses `input` into a [`ConfigurableInput`].
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ConfigurableInput> {
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Configurable requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Configurable can only be derived for structs",
            ));
        }
    };

    let mut errors = None;
    let mut seen = HashSet::new();
    let mut fields = Vec::new();
    for field in named {
        let attrs = match parse_field_attrs(field) {
            Ok(attrs) => attrs,
            Err(err) => {
                combine(&mut errors, err);
                continue;
            }
        };
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        if attrs.skip {
            continue;
        }
        let Some(shape) = field_shape(&field.ty) else {
            combine(
                &mut errors,
                syn::Error::new_spanned(
                    &field.ty,
                    "unsupported field type for Configurable; mark it #[configurable(skip)]",
                ),
            );
            continue;
        };
        let mutator = mutator_name(&ident, attrs.rename.as_ref());
        if !seen.insert(mutator.clone()) {
            combine(
                &mut errors,
                syn::Error::new_spanned(&ident, format!("duplicate mutator '{mutator}'")),
            );
            continue;
        }
        fields.push(MutatorField {
            ident,
            mutator,
            shape,
        });
    }

    if let Some(err) = errors {
        return Err(err);
    }
    Ok(ConfigurableInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        crate_path: struct_attrs.crate_path,
        fields,
    })
}
