//! Input parsing for the `ActionConf` derive macro.
//!
//! This module gathers the struct identifier, fields, and attribute metadata
//! in one pass so macro expansion can fail fast with useful errors.

use syn::ext::IdentExt as _;
use syn::{Data, DeriveInput, Fields};

use super::{FieldAttrs, StructAttrs, option_inner, parse_field_attrs, parse_struct_attrs};

/// A named field together with its parsed attributes.
pub(crate) struct ParsedField {
    pub ident: syn::Ident,
    pub ty: syn::Type,
    pub attrs: FieldAttrs,
}

/// Everything the generator needs to know about the deriving struct.
pub(crate) struct ParsedInput {
    pub ident: syn::Ident,
    pub attrs: StructAttrs,
    pub fields: Vec<ParsedField>,
}

impl ParsedInput {
    /// The embedded parent context, if any.
    pub(crate) fn base(&self) -> Option<&ParsedField> {
        self.fields.iter().find(|f| f.attrs.base)
    }

    /// The field holding the action path, if any.
    pub(crate) fn path_field(&self) -> Option<&ParsedField> {
        self.fields.iter().find(|f| f.attrs.path)
    }

    /// Fields emitted as arguments, in declaration order.
    pub(crate) fn tagged(&self) -> impl Iterator<Item = &ParsedField> {
        self.fields.iter().filter(|f| f.attrs.tagged)
    }

    /// Resolves the token key for a tagged field.
    ///
    /// An explicit `key` wins; otherwise the field name (without any `r#`
    /// prefix) is passed through `rename_all` when one is set.
    pub(crate) fn key_for(&self, field: &ParsedField) -> String {
        if let Some(key) = &field.attrs.key {
            return key.clone();
        }
        let raw = field.ident.unraw().to_string();
        self.attrs
            .rename_all
            .map_or_else(|| raw.clone(), |rule| rule.apply(&raw))
    }
}

/// Gathers information from the user-provided struct.
///
/// Rejects enums, unions, tuple structs and generic structs, reports a
/// second `base` or `path` field at its own span, and rejects `nullable` on
/// fields that can never be absent.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ParsedInput> {
    let ident = input.ident.clone();
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "ActionConf cannot be derived for generic structs",
        ));
    }
    let attrs = parse_struct_attrs(&input.attrs)?;
    let raw_fields: Vec<syn::Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().cloned().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "ActionConf requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &ident,
                "ActionConf can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::with_capacity(raw_fields.len());
    let mut seen_base = false;
    let mut seen_path = false;
    for field in raw_fields {
        let field_attrs = parse_field_attrs(&field)?;
        if field_attrs.base && std::mem::replace(&mut seen_base, true) {
            return Err(syn::Error::new_spanned(
                &field,
                "only one field may be marked `base`",
            ));
        }
        if field_attrs.path && std::mem::replace(&mut seen_path, true) {
            return Err(syn::Error::new_spanned(
                &field,
                "only one field may be marked `path`",
            ));
        }
        if field_attrs.nullable && field_attrs.with.is_none() && option_inner(&field.ty).is_none()
        {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "`nullable` requires an `Option` field or a `with` reader",
            ));
        }
        let Some(field_ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(&field, "ActionConf requires named fields"));
        };
        fields.push(ParsedField {
            ident: field_ident,
            ty: field.ty,
            attrs: field_attrs,
        });
    }
    Ok(ParsedInput {
        ident,
        attrs,
        fields,
    })
}
