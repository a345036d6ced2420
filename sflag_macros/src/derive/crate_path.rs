//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[sflag(crate = "...")]` attribute value into the
//! path that prefixes every runtime item in generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the crate path from the parsed struct attribute.
///
/// Defaults to `::sflag` when no override is present.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::sflag }, |path| quote! { #path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default(None, ":: sflag")]
    #[case::custom(Some("my_alias"), "my_alias")]
    #[case::nested(Some("deps::sflag"), "deps :: sflag")]
    fn resolve_produces_expected_tokens(#[case] input: Option<&str>, #[case] expected: &str) {
        let parsed = input.map(|s| syn::parse_str::<syn::Path>(s).expect("valid path"));
        let tokens = resolve(parsed.as_ref());
        assert_eq!(tokens.to_string(), expected);
    }
}
