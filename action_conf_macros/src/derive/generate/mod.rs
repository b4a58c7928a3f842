//! Code generation for `#[derive(ActionConf)]`.
//!
//! The output has three parts: an inherent constant holding the struct's own
//! descriptor table, the `ConfFields` implementation that prepends the base
//! context's entries, and, when the struct is named, an `ActionContext`
//! implementation.

mod reader;

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive::crate_path;
use crate::derive::parse::ParsedInput;

/// Generate the complete derive output for a parsed struct.
pub(crate) fn generate(input: &ParsedInput) -> TokenStream {
    let krate = crate_path::resolve(input.attrs.crate_path.as_ref());
    let table = generate_table(input, &krate);
    let fields_impl = generate_conf_fields_impl(input, &krate);
    let context_impl = generate_context_impl(input, &krate);
    quote! {
        #table
        #fields_impl
        #context_impl
    }
}

/// Emits the struct's own descriptor table as a hidden inherent constant.
fn generate_table(input: &ParsedInput, krate: &TokenStream) -> TokenStream {
    let ident = &input.ident;
    let entries = input
        .tagged()
        .map(|field| reader::field_entry(field, &input.key_for(field), krate));
    quote! {
        impl #ident {
            #[doc(hidden)]
            const __ACTION_CONF_FIELDS: &'static [#krate::ConfField<Self>] = &[
                #( #entries, )*
            ];
        }
    }
}

fn generate_conf_fields_impl(input: &ParsedInput, krate: &TokenStream) -> TokenStream {
    let ident = &input.ident;
    let (base_visit, base_table) = input.base().map_or_else(
        || (quote! {}, quote! { ::std::vec::Vec::new() }),
        |base| {
            let base_ident = &base.ident;
            let base_ty = &base.ty;
            (
                quote! { #krate::ConfFields::visit_fields(&self.#base_ident, visitor)?; },
                quote! { <#base_ty as #krate::ConfFields>::descriptor_table() },
            )
        },
    );
    let action_path = generate_action_path(input, krate);
    quote! {
        impl #krate::ConfFields for #ident {
            fn visit_fields(
                &self,
                visitor: &mut dyn #krate::FieldVisitor,
            ) -> #krate::ActionResult<()> {
                #base_visit
                #krate::visit_table(self, Self::__ACTION_CONF_FIELDS, visitor)
            }

            fn descriptor_table() -> ::std::vec::Vec<#krate::FieldSpec> {
                let mut table = #base_table;
                table.extend(Self::__ACTION_CONF_FIELDS.iter().map(|field| field.spec));
                table
            }

            #action_path
        }
    }
}

/// Emits `action_path` from the `path` field, or delegates to the base.
fn generate_action_path(input: &ParsedInput, krate: &TokenStream) -> TokenStream {
    if let Some(field) = input.path_field() {
        let ident = &field.ident;
        let body = if crate::derive::parse::option_inner(&field.ty).is_some() {
            quote! { self.#ident.as_ref().map(::core::convert::AsRef::<str>::as_ref) }
        } else {
            quote! { ::core::option::Option::Some(::core::convert::AsRef::<str>::as_ref(&self.#ident)) }
        };
        return quote! {
            fn action_path(&self) -> ::core::option::Option<&str> {
                #body
            }
        };
    }
    input.base().map_or_else(TokenStream::new, |base| {
        let base_ident = &base.ident;
        quote! {
            fn action_path(&self) -> ::core::option::Option<&str> {
                #krate::ConfFields::action_path(&self.#base_ident)
            }
        }
    })
}

fn generate_context_impl(input: &ParsedInput, krate: &TokenStream) -> TokenStream {
    let Some(name) = &input.attrs.name else {
        return TokenStream::new();
    };
    let ident = &input.ident;
    quote! {
        impl #krate::ActionContext for #ident {
            fn name(&self) -> &str {
                #name
            }
        }
    }
}
