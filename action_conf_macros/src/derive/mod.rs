//! Expansion pipeline for `#[derive(ActionConf)]`.
//!
//! Parsing validates the input eagerly so that the generator only ever sees
//! a consistent description of the struct.

mod crate_path;
mod generate;
mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Parse the derive input and emit the trait implementations.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    Ok(generate::generate(&parsed))
}
