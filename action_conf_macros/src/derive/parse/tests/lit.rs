//! Tests for literal parsing helpers.

use super::super::*;
use anyhow::{Result, anyhow, ensure};
use syn::Attribute;

#[test]
fn lit_str_parses_string_values() -> Result<()> {
    let attr: Attribute = syn::parse_quote!(#[action_conf(key = "jar")]);
    let mut observed = None;
    attr.parse_nested_meta(|meta| {
        let s = lit_str(&meta, "key")?;
        observed = Some(s.value());
        Ok(())
    })
    .map_err(|err| anyhow!("expected attribute parsing to succeed: {err}"))?;
    let value = observed.ok_or_else(|| anyhow!("key attribute callback was not invoked"))?;
    ensure!(value == "jar", "unexpected key value: {value}");
    Ok(())
}

#[test]
fn lit_bool_parses_bool_values() -> Result<()> {
    let attr: Attribute = syn::parse_quote!(#[action_conf(nullable = false)]);
    let mut observed = None;
    attr.parse_nested_meta(|meta| {
        observed = Some(lit_bool(&meta, "nullable")?);
        Ok(())
    })
    .map_err(|err| anyhow!("expected attribute parsing to succeed: {err}"))?;
    ensure!(observed == Some(false), "unexpected nullable value: {observed:?}");
    Ok(())
}

#[test]
fn lit_str_reports_expected_type() -> Result<()> {
    let attr: Attribute = syn::parse_quote!(#[action_conf(key = 5)]);
    let err = attr
        .parse_nested_meta(|meta| lit_str(&meta, "key").map(drop))
        .err()
        .ok_or_else(|| anyhow!("expected integer key to be rejected"))?;
    ensure!(
        err.to_string() == "key must be a string",
        "unexpected error: {err}"
    );
    Ok(())
}
