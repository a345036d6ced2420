//! Best-effort conversion of default text into native field values.
//!
//! Malformed defaults never abort binding: they fall back to the type's zero
//! value and emit a `tracing` warning naming the field.

use std::str::FromStr;

/// Parses a boolean literal.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their `false`
/// counterparts `0`, `f`, `F`, `FALSE`, `false`, `False`. Also used as the
/// value parser for boolean flags.
///
/// # Errors
///
/// Returns a message naming the rejected literal.
pub fn parse_bool_literal(text: &str) -> Result<bool, String> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(format!("invalid boolean literal `{other}`")),
    }
}

/// Converts `text` for the field `name`, falling back to `T::default()`.
fn lenient<T, E, F>(name: &str, type_name: &str, text: &str, parse: F) -> T
where
    T: Default,
    E: std::fmt::Display,
    F: FnOnce(&str) -> Result<T, E>,
{
    parse(text).unwrap_or_else(|error| {
        tracing::warn!(
            field = name,
            kind = type_name,
            text,
            %error,
            "default value failed to convert; using zero value"
        );
        T::default()
    })
}

pub(crate) fn bool_default(name: &str, text: &str) -> bool {
    lenient(name, "bool", text, parse_bool_literal)
}

pub(crate) fn int_default(name: &str, text: &str) -> i64 {
    lenient(name, "i64", text, i64::from_str)
}

pub(crate) fn float_default(name: &str, text: &str) -> f64 {
    lenient(name, "f64", text, f64::from_str)
}
