//! Parsing utilities for the `ActionConf` derive macro.
//!
//! Struct-level keys describe the action as a whole; field-level keys decide
//! whether a field is tagged and how its value is read. Unlike serde-style
//! attributes, unknown keys are rejected: a misspelt `nullable` would
//! otherwise silently turn an optional field into a required one.

use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Meta, Token};

mod input;
mod literals;
#[cfg(test)]
mod tests;
mod type_utils;

pub(crate) use input::{ParsedField, ParsedInput, parse_input};
use literals::{lit_bool, lit_str};
pub(crate) use type_utils::{option_inner, vec_inner};

/// Name of the helper attribute recognised by the derive.
const ATTR: &str = "action_conf";

/// Struct-level attributes recognised by `#[derive(ActionConf)]`.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Action name emitted as the first token; also enables the
    /// `ActionContext` implementation.
    pub name: Option<String>,
    /// Case conversion applied to field names without an explicit `key`.
    pub rename_all: Option<RenameRule>,
    /// Overrides the generated crate path for dependency aliasing.
    pub crate_path: Option<syn::Path>,
}

/// Case conversions accepted by `rename_all`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RenameRule {
    Snake,
    Kebab,
    Camel,
    Pascal,
    ScreamingSnake,
}

impl RenameRule {
    pub(crate) fn parse(s: &str, span: Span) -> syn::Result<Self> {
        match s {
            "snake_case" => Ok(Self::Snake),
            "kebab-case" => Ok(Self::Kebab),
            "camelCase" => Ok(Self::Camel),
            "PascalCase" => Ok(Self::Pascal),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnake),
            _ => Err(syn::Error::new(
                span,
                format!(
                    "unknown rename_all rule '{s}'; expected one of \"snake_case\", \
                     \"kebab-case\", \"camelCase\", \"PascalCase\", or \"SCREAMING_SNAKE_CASE\""
                ),
            )),
        }
    }

    pub(crate) fn apply(self, name: &str) -> String {
        match self {
            Self::Snake => name.to_snake_case(),
            Self::Kebab => name.to_kebab_case(),
            Self::Camel => name.to_lower_camel_case(),
            Self::Pascal => name.to_upper_camel_case(),
            Self::ScreamingSnake => name.to_shouty_snake_case(),
        }
    }
}

/// Explicit value shape requested by `list` or `scalar`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum KindOverride {
    List,
    Scalar,
}

/// Field-level attributes recognised by `#[derive(ActionConf)]`.
///
/// - `key` overrides the emitted token name.
/// - `nullable` lets the field be absent without error.
/// - `list`/`scalar` force the rendering shape instead of inferring it from
///   the field type.
/// - `with` names a fallible reader `fn(&FieldTy) -> Result<ConfValue, FieldAccessError>`.
/// - `base` embeds the parent context.
/// - `path` marks the field holding the action path.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub tagged: bool,
    pub key: Option<String>,
    pub nullable: bool,
    pub kind: Option<KindOverride>,
    pub with: Option<syn::Path>,
    pub base: bool,
    pub path: bool,
}

/// Iterate all `#[action_conf]` attributes and apply a callback to each
/// nested key. Returns `true` when at least one attribute was present.
fn parse_action_conf<F>(attrs: &[Attribute], mut f: F) -> syn::Result<bool>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    let mut present = false;
    for attr in attrs.iter().filter(|a| a.path().is_ident(ATTR)) {
        present = true;
        match &attr.meta {
            Meta::Path(_) => {}
            Meta::List(_) => attr.parse_nested_meta(|meta| f(&meta))?,
            Meta::NameValue(nv) => {
                return Err(syn::Error::new_spanned(
                    nv,
                    "expected `#[action_conf]` or `#[action_conf(...)]`",
                ));
            }
        }
    }
    Ok(present)
}

/// Accepts both `flag` and `flag = true|false`.
fn flag(meta: &ParseNestedMeta, key: &str) -> syn::Result<bool> {
    if meta.input.peek(Token![=]) {
        lit_bool(meta, key)
    } else {
        Ok(true)
    }
}

fn unknown_key(meta: &ParseNestedMeta) -> syn::Error {
    let name = meta
        .path
        .get_ident()
        .map_or_else(|| String::from("<path>"), ToString::to_string);
    meta.error(format!("unknown action_conf attribute `{name}`"))
}

/// Extracts `#[action_conf(...)]` metadata applied to a struct.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_action_conf(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("name") => {
                let s = lit_str(meta, "name")?;
                if s.value().is_empty() {
                    return Err(syn::Error::new(s.span(), "name must not be empty"));
                }
                out.name = Some(s.value());
                Ok(())
            }
            Some("rename_all") => {
                let s = lit_str(meta, "rename_all")?;
                out.rename_all = Some(RenameRule::parse(&s.value(), s.span())?);
                Ok(())
            }
            Some("crate") => {
                let s = lit_str(meta, "crate")?;
                let path: syn::Path =
                    syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
                out.crate_path = Some(path);
                Ok(())
            }
            _ => Err(unknown_key(meta)),
        }
    })?;
    Ok(out)
}

/// Applies one nested field key. Returns `true` when the key describes the
/// field's value (as opposed to its role).
fn apply_field_attr(meta: &ParseNestedMeta, out: &mut FieldAttrs) -> syn::Result<bool> {
    let Some(ident) = meta.path.get_ident() else {
        return Err(unknown_key(meta));
    };
    match ident.to_string().as_str() {
        "key" => {
            let s = lit_str(meta, "key")?;
            if s.value().is_empty() {
                return Err(syn::Error::new(s.span(), "key must not be empty"));
            }
            out.key = Some(s.value());
            Ok(true)
        }
        "nullable" => {
            out.nullable = flag(meta, "nullable")?;
            Ok(true)
        }
        "list" => set_kind(meta, out, KindOverride::List).map(|()| true),
        "scalar" => set_kind(meta, out, KindOverride::Scalar).map(|()| true),
        "with" => {
            out.with = Some(meta.value()?.parse()?);
            Ok(true)
        }
        "base" => {
            out.base = true;
            Ok(false)
        }
        "path" => {
            out.path = true;
            Ok(false)
        }
        _ => Err(unknown_key(meta)),
    }
}

fn set_kind(meta: &ParseNestedMeta, out: &mut FieldAttrs, kind: KindOverride) -> syn::Result<()> {
    match out.kind {
        Some(existing) if existing != kind => {
            Err(meta.error("`list` and `scalar` are mutually exclusive"))
        }
        _ => {
            out.kind = Some(kind);
            Ok(())
        }
    }
}

/// Parses field-level `#[action_conf(...)]` attributes.
///
/// A field is tagged when it carries any `action_conf` attribute other than a
/// `base` or `path` role marker. Role markers cannot be combined with value
/// keys, nor with each other.
pub(crate) fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    let mut value_keys = false;
    let present = parse_action_conf(&field.attrs, |meta| {
        value_keys |= apply_field_attr(meta, &mut out)?;
        Ok(())
    })?;
    if out.base && out.path {
        return Err(syn::Error::new_spanned(
            field,
            "`base` and `path` cannot be applied to the same field",
        ));
    }
    if (out.base || out.path) && value_keys {
        let role = if out.base { "base" } else { "path" };
        return Err(syn::Error::new_spanned(
            field,
            format!("`{role}` fields are not emitted; remove `key`, `nullable`, `list`, `scalar` and `with`"),
        ));
    }
    out.tagged = present && !out.base && !out.path;
    Ok(out)
}
