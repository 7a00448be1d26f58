//! Attribute and input parsing for the `Configurable` derive.

mod input;
pub(crate) mod type_utils;

use syn::{Attribute, LitStr};

pub(crate) use input::{ConfigurableInput, MutatorField, parse_input};

/// Parsed `#[configurable(...)]` attributes on the struct.
#[derive(Default)]
pub(crate) struct StructAttrs {
    pub(crate) crate_path: Option<syn::Path>,
}

/// Parsed `#[configurable(...)]` attributes on a field.
#[derive(Default)]
pub(crate) struct FieldAttrs {
    pub(crate) skip: bool,
    pub(crate) rename: Option<LitStr>,
}

/// Iterate all `#[configurable(...)]` attributes once and apply a callback.
fn parse_configurable<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&syn::meta::ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("configurable")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn lit_str(meta: &syn::meta::ParseNestedMeta) -> syn::Result<LitStr> {
    meta.value()?.parse()
}

/// Parses struct-level attributes. Only `crate = "..."` is recognised.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_configurable(attrs, |meta| {
        if meta.path.is_ident("crate") {
            let s = lit_str(meta)?;
            let path: syn::Path =
                syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
            out.crate_path = Some(path);
            Ok(())
        } else {
            Err(meta.error("unknown configurable attribute; expected `crate`"))
        }
    })?;
    Ok(out)
}

/// Parses field-level attributes: `skip` and `rename = "..."`.
pub(crate) fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_configurable(&field.attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("skip") => {
                out.skip = true;
                Ok(())
            }
            Some("rename") => {
                let s = lit_str(meta)?;
                if s.value().is_empty() {
                    return Err(syn::Error::new(s.span(), "rename must not be empty"));
                }
                out.rename = Some(s);
                Ok(())
            }
            _ => Err(meta.error("unknown configurable attribute; expected `skip` or `rename`")),
        }
    })?;
    Ok(out)
}
