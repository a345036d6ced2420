//! Unit tests for the binding-table generator.

use super::sflag_impl;
use crate::derive::crate_path;
use crate::derive::parse::parse_input;
use anyhow::{Result, ensure};
use quote::quote;
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

fn render(input: &DeriveInput) -> Result<String> {
    let record = parse_input(input)?;
    let krate = crate_path::resolve(record.attrs.crate_path.as_ref());
    Ok(sflag_impl(&record, &krate).to_string())
}

#[rstest]
fn renders_entries_in_declaration_order() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Opts {
            #[sflag("demo")]
            usage: String,
            #[sflag("do not inflate | 42")]
            iq: i64,
            #[sflag("verbose output")]
            verbose: bool,
            args: Vec<String>,
        }
    };
    let expected = quote! {
        impl ::sflag::Sflag for Opts {
            fn fields(&mut self) -> ::std::vec::Vec<::sflag::Field<'_>> {
                ::std::vec![
                    ::sflag::Field::new("usage", "demo", ::sflag::Slot::Usage(&mut self.usage)),
                    ::sflag::Field::new("iq", "do not inflate | 42", ::sflag::Slot::Int(&mut self.iq)),
                    ::sflag::Field::new("verbose", "verbose output", ::sflag::Slot::Bool(&mut self.verbose)),
                    ::sflag::Field::new("args", "", ::sflag::Slot::Positional(&mut self.args))
                ]
            }
        }
    };
    let rendered = render(&input)?;
    ensure!(
        rendered == expected.to_string(),
        "generated tokens differ: {rendered} != {expected}"
    );
    Ok(())
}

#[rstest]
fn honours_crate_path_and_generics() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[sflag(crate = "deps::sflag")]
        struct Opts<T: Clone> {
            #[sflag("ratio | 0.5")]
            ratio: f64,
            marker: T,
        }
    };
    let rendered = render(&input)?;
    ensure!(
        rendered.contains("impl < T : Clone > deps :: sflag :: Sflag for Opts < T >"),
        "unexpected impl header: {rendered}"
    );
    ensure!(
        rendered.contains("deps :: sflag :: Slot :: Float (& mut self . ratio)"),
        "missing float slot: {rendered}"
    );
    ensure!(!rendered.contains("marker"), "unsupported field leaked: {rendered}");
    Ok(())
}

#[rstest]
fn unraws_field_names() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Opts {
            #[sflag("kind of thing")]
            r#type: String,
        }
    };
    let rendered = render(&input)?;
    ensure!(
        rendered.contains("\"type\""),
        "flag name should drop the raw prefix: {rendered}"
    );
    ensure!(
        rendered.contains("self . r#type"),
        "field access should keep the raw identifier: {rendered}"
    );
    Ok(())
}
