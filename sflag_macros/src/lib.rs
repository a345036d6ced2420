//! Procedural macros for `sflag`.
//!
//! `#[derive(Sflag)]` turns a struct with named fields into a binding table
//! for the `sflag` runtime. Each supported field becomes an entry named after
//! the field and carrying its `#[sflag("...")]` annotation:
//!
//! - `String`, `bool`, `i64` and `f64` fields become flags;
//! - a single `Vec<String>` field receives the positional arguments;
//! - a `String` field named `usage` receives the synthesized usage text, and
//!   its annotation is the usage header.
//!
//! Fields of any other type are left out of the table.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for [`sflag::Sflag`].
///
/// [`sflag::Sflag`]: https://docs.rs/sflag/latest/sflag/trait.Sflag.html
#[proc_macro_derive(Sflag, attributes(sflag))]
pub fn derive_sflag(tokens: TokenStream) -> TokenStream {
    let input = parse_macro_input!(tokens as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
