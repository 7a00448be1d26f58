//! Code generation for `#[derive(Configurable)]`.

use proc_macro2::TokenStream;
use quote::quote;

use super::crate_path;
use super::parse::{ConfigurableInput, MutatorField};

fn accept_arm(krate: &TokenStream, field: &MutatorField) -> TokenStream {
    let mutator = &field.mutator;
    let variant = field.shape.kind.variant();
    quote! { (#mutator, #krate::ValueKind::#variant) }
}

fn set_arm(krate: &TokenStream, field: &MutatorField) -> TokenStream {
    let MutatorField {
        ident,
        mutator,
        shape,
    } = field;
    let variant = shape.kind.variant();
    let converted = if shape.collect {
        quote! { __paramwire_value.into_iter().collect() }
    } else {
        quote! { __paramwire_value }
    };
    let assigned = if shape.optional {
        quote! { ::core::option::Option::Some(#converted) }
    } else {
        converted
    };
    quote! {
        #krate::ParamValue::#variant(__paramwire_value) if mutator == #mutator => {
            self.#ident = #assigned;
            ::core::result::Result::Ok(())
        }
    }
}

/// Generates the `Configurable` implementation.
pub(crate) fn configurable_impl(input: &ConfigurableInput) -> TokenStream {
    let krate = crate_path::resolve(input.crate_path.as_ref());
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let accepts_body = if input.fields.is_empty() {
        quote! {
            let _ = (mutator, kind);
            false
        }
    } else {
        let arms = input.fields.iter().map(|field| accept_arm(&krate, field));
        quote! { ::core::matches!((mutator, kind), #( #arms )|*) }
    };
    let set_arms = input.fields.iter().map(|field| set_arm(&krate, field));

    quote! {
        impl #impl_generics #krate::Configurable for #ident #ty_generics #where_clause {
            fn accepts(&self, mutator: &str, kind: #krate::ValueKind) -> bool {
                #accepts_body
            }

            fn set(
                &mut self,
                mutator: &str,
                value: #krate::ParamValue,
            ) -> ::core::result::Result<(), #krate::MutatorError> {
                match value {
                    #( #set_arms )*
                    __paramwire_other => ::core::result::Result::Err(
                        #krate::MutatorError::unsupported(mutator, &__paramwire_other),
                    ),
                }
            }
        }
    }
}
