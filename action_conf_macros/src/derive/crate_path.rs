//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[action_conf(crate = "...")]` attribute value into
//! the `TokenStream` prefixing every runtime path in generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the crate path from the parsed struct attribute.
///
/// Defaults to `::action_conf` when no override is present. Setting
/// `crate = "crate"` lets `action_conf` derive on its own types.
///
/// # Examples
///
/// ```rust,ignore
/// let default = resolve(None);
/// assert_eq!(default.to_string(), ":: action_conf");
///
/// let path: syn::Path = syn::parse_str("my_alias").unwrap();
/// let aliased = resolve(Some(&path));
/// assert_eq!(aliased.to_string(), "my_alias");
/// ```
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::action_conf }, |path| quote! { #path })
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests fail fast on unexpected errors")]
mod tests {
    //! Unit tests for crate path resolution with default and custom paths.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default(None, ":: action_conf")]
    #[case::own_crate(Some("crate"), "crate")]
    #[case::custom(Some("my_alias"), "my_alias")]
    #[case::nested(Some("my_ns::action_conf"), "my_ns :: action_conf")]
    fn resolve_produces_expected_tokens(#[case] input: Option<&str>, #[case] expected: &str) {
        let parsed = input.map(|s| syn::parse_str::<syn::Path>(s).expect("valid path"));
        let tokens = resolve(parsed.as_ref());
        assert_eq!(tokens.to_string(), expected);
    }
}
