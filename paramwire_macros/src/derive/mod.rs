//! Expansion of `#[derive(Configurable)]`.

mod crate_path;
mod generate;
mod kind;
mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Expands the derive for `input`.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    Ok(generate::configurable_impl(&parsed))
}

#[cfg(test)]
mod tests;
