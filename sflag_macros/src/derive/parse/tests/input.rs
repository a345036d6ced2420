//! Tests for struct and field attribute parsing.

use super::super::{FieldKind, parse_input};
use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

fn error_message(input: &DeriveInput) -> Result<String> {
    match parse_input(input) {
        Ok(_) => Err(anyhow!("expected parse_input to fail")),
        Err(err) => Ok(err.to_string()),
    }
}

#[rstest]
fn collects_supported_fields_in_order() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Opts {
            #[sflag("header text")]
            usage: String,
            #[sflag("n | bob")]
            name: String,
            count: u32,
            untagged: f64,
            rest: Vec<String>,
        }
    };
    let record = parse_input(&input)?;
    let summary: Vec<_> = record
        .fields
        .iter()
        .map(|spec| (spec.name.as_str(), spec.kind, spec.annotation.as_str()))
        .collect();
    ensure!(
        summary
            == [
                ("usage", FieldKind::Usage, "header text"),
                ("name", FieldKind::Text, "n | bob"),
                ("untagged", FieldKind::Float, ""),
                ("rest", FieldKind::Positional, ""),
            ],
        "unexpected fields: {summary:?}"
    );
    Ok(())
}

#[rstest]
fn usage_with_other_type_is_dropped() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Opts {
            #[sflag("not text")]
            usage: i64,
        }
    };
    let record = parse_input(&input)?;
    ensure!(record.fields.is_empty(), "usage field should be dropped");
    Ok(())
}

#[rstest]
#[case::enum_input(
    parse_quote! { enum Opts { A } },
    "Sflag can only be derived for structs"
)]
#[case::tuple_struct(parse_quote! { struct Opts(String); }, "Sflag requires named fields")]
#[case::two_positionals(
    parse_quote! { struct Opts { a: Vec<String>, b: Vec<String> } },
    "only one Vec<String> field may collect positional arguments"
)]
#[case::duplicate_annotation(
    parse_quote! { struct Opts { #[sflag("a")] #[sflag("b")] name: String } },
    "a field may carry only one sflag annotation"
)]
#[case::unknown_struct_option(
    parse_quote! { #[sflag(prefix = "x")] struct Opts { name: String } },
    "unsupported sflag option on struct"
)]
#[case::non_string_crate(
    parse_quote! { #[sflag(crate = 1)] struct Opts { name: String } },
    "crate must be a string"
)]
fn rejects_invalid_input(#[case] input: DeriveInput, #[case] expected: &str) -> Result<()> {
    let message = error_message(&input)?;
    ensure!(message == expected, "unexpected error: {message}");
    Ok(())
}

#[rstest]
fn non_literal_annotation_is_an_error() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Opts {
            #[sflag(description = "x")]
            name: String,
        }
    };
    let message = error_message(&input)?;
    ensure!(!message.is_empty(), "expected a parse error");
    Ok(())
}
