//! Procedural macros for `action_conf`.
//!
//! `#[derive(ActionConf)]` turns `#[action_conf(...)]` field attributes into a
//! static descriptor table and implements `action_conf::ConfFields` over it.
//! Structs that also declare `#[action_conf(name = "...")]` receive an
//! `action_conf::ActionContext` implementation, so calling `arguments()` on
//! them yields the flattened argument vector.
//!
//! Only fields carrying an `action_conf` attribute participate. A field marked
//! `base` embeds the parent context; its entries always precede the entries
//! declared on the deriving struct.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `action_conf::ConfFields`.
///
/// Recognised struct attributes are `name`, `rename_all` and `crate`; field
/// attributes are `key`, `nullable`, `list`, `scalar`, `with`, `base` and
/// `path`. See the `action_conf` crate documentation for examples.
#[proc_macro_derive(ActionConf, attributes(action_conf))]
pub fn derive_action_conf(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
