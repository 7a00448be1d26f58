//! Procedural macros for `paramwire`.
//!
//! The [`Configurable`](macro@Configurable) derive turns each named field of
//! a struct into a mutator. Field `base_path` becomes mutator
//! `setBasePath`, which is what a document parameter named `basePath`
//! resolves to.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `paramwire::Configurable`.
///
/// Supported field types are `String`, `bool`, `i64`, `i32`, `f64`, `f32`,
/// `Vec<String>`, and `IndexMap`, `HashMap`, or `BTreeMap` from `String` to
/// `String`, each optionally wrapped in `Option`.
///
/// Field attributes:
///
/// - `#[configurable(skip)]` leaves the field without a mutator.
/// - `#[configurable(rename = "URL")]` names the document parameter
///   explicitly, giving mutator `setURL`.
///
/// The struct attribute `#[configurable(crate = "path")]` points the
/// generated code at a renamed dependency.
#[proc_macro_derive(Configurable, attributes(configurable))]
pub fn derive_configurable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
