//! Descriptor table entries for individual fields.
//!
//! Each tagged field becomes a `ConfField` literal: its static `FieldSpec`
//! and a non-capturing closure reading the value out of `&Self`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Type;

use crate::derive::parse::{KindOverride, ParsedField, option_inner, vec_inner};

/// Rendering shape of a field, derived from its type and overrides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Shape {
    /// `Option<_>`: `None` reads as absent.
    pub optional: bool,
    pub list: bool,
}

/// Infers the shape of `ty`, honouring an explicit `list`/`scalar` override.
pub(crate) fn shape_of(ty: &Type, kind: Option<KindOverride>) -> Shape {
    let (optional, inner) = option_inner(ty).map_or((false, ty), |inner| (true, inner));
    let list = match kind {
        Some(KindOverride::List) => true,
        Some(KindOverride::Scalar) => false,
        None => vec_inner(inner).is_some(),
    };
    Shape { optional, list }
}

fn read_expr(field: &ParsedField, shape: Shape, krate: &TokenStream) -> TokenStream {
    let ident = &field.ident;
    if let Some(with) = &field.attrs.with {
        return quote! { #with(&this.#ident) };
    }
    let value = match (shape.optional, shape.list) {
        (true, true) => quote! { #krate::ConfValue::optional_list(this.#ident.as_ref()) },
        (true, false) => quote! { #krate::ConfValue::optional_scalar(this.#ident.as_ref()) },
        (false, true) => quote! { #krate::ConfValue::list(&this.#ident) },
        (false, false) => quote! { #krate::ConfValue::scalar(&this.#ident) },
    };
    quote! { ::core::result::Result::Ok(#value) }
}

/// Emits the `ConfField` literal for one tagged field.
pub(crate) fn field_entry(field: &ParsedField, key: &str, krate: &TokenStream) -> TokenStream {
    let shape = shape_of(&field.ty, field.attrs.kind);
    let kind = if shape.list {
        quote! { #krate::ValueKind::List }
    } else {
        quote! { #krate::ValueKind::Scalar }
    };
    let nullable = field.attrs.nullable;
    let read = read_expr(field, shape, krate);
    quote! {
        #krate::ConfField {
            spec: #krate::FieldSpec {
                key: #key,
                nullable: #nullable,
                kind: #kind,
            },
            read: |this: &Self| #read,
        }
    }
}
