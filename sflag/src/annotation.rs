//! Parsing of per-field annotation text.
//!
//! An annotation has the shape `[<delim>]<description>[<delim><default>]`.
//! Text starting with an ASCII letter or digit uses `|` as the delimiter;
//! any other leading character is itself the delimiter and is dropped. This
//! lets a default contain a literal pipe:
//!
//! ```text
//! "! is a command ! 'yes | head'"
//! ```

const DEFAULT_DELIMITER: char = '|';

/// Description and optional default text parsed from an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation<'a> {
    /// Help text for the flag.
    pub description: &'a str,
    /// Default value text; `Some("")` when the delimiter is present but the
    /// default is blank.
    pub default: Option<&'a str>,
}

impl<'a> Annotation<'a> {
    /// Parses `raw`, returning `None` when it is blank.
    ///
    /// Only the first delimiter separates description from default; later
    /// occurrences remain part of the default.
    ///
    /// # Examples
    ///
    /// ```
    /// use sflag::Annotation;
    ///
    /// let parsed = Annotation::parse("do not inflate | 42").unwrap();
    /// assert_eq!(parsed.description, "do not inflate");
    /// assert_eq!(parsed.default, Some("42"));
    ///
    /// let piped = Annotation::parse("! is a command ! 'yes | head'").unwrap();
    /// assert_eq!(piped.default, Some("'yes | head'"));
    ///
    /// assert_eq!(Annotation::parse("   "), None);
    /// ```
    #[must_use]
    pub fn parse(raw: &'a str) -> Option<Self> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let first = chars.next()?;
        let (delimiter, body) = if first.is_ascii_alphanumeric() {
            (DEFAULT_DELIMITER, trimmed)
        } else {
            (first, chars.as_str())
        };
        let annotation = body.split_once(delimiter).map_or(
            Self {
                description: body.trim(),
                default: None,
            },
            |(description, default)| Self {
                description: description.trim(),
                default: Some(default.trim()),
            },
        );
        Some(annotation)
    }

    /// Default text as shown in the usage listing; blank when absent.
    #[must_use]
    pub fn default_text(&self) -> &'a str {
        self.default.unwrap_or_default()
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests panic to surface malformed fixtures"
)]
mod tests {
    use super::Annotation;
    use rstest::rstest;

    #[rstest]
    #[case::plain_number("42", "42", None)]
    #[case::pipe("do not inflate | 42", "do not inflate", Some("42"))]
    #[case::custom_delimiter(
        "! is a command ! 'yes | head'",
        "is a command",
        Some("'yes | head'")
    )]
    #[case::leading_space(" must be writable | /an/output/file", "must be writable", Some("/an/output/file"))]
    #[case::blank_default("name |", "name", Some(""))]
    #[case::description_only("contains the something", "contains the something", None)]
    #[case::extra_delimiters("path | a | b", "path", Some("a | b"))]
    #[case::delimiter_without_default("# only a description", "only a description", None)]
    #[case::float_default(
        "in Vietnamese Dong | 42000000000000000000000000.0",
        "in Vietnamese Dong",
        Some("42000000000000000000000000.0")
    )]
    fn parses_annotations(
        #[case] raw: &str,
        #[case] description: &str,
        #[case] default: Option<&str>,
    ) {
        let parsed = Annotation::parse(raw).expect("annotation should not be blank");
        assert_eq!(parsed.description, description);
        assert_eq!(parsed.default, default);
    }

    #[rstest]
    #[case("")]
    #[case("  \t\n ")]
    fn blank_annotations_are_skipped(#[case] raw: &str) {
        assert_eq!(Annotation::parse(raw), None);
    }

    #[rstest]
    fn custom_delimiter_keeps_pipes_in_description() {
        let parsed = Annotation::parse("%a|b % c").expect("parsed");
        assert_eq!(parsed.description, "a|b");
        assert_eq!(parsed.default_text(), "c");
    }

    #[rstest]
    fn lone_delimiter_yields_empty_description() {
        let parsed = Annotation::parse("!").expect("parsed");
        assert_eq!(parsed.description, "");
        assert_eq!(parsed.default, None);
    }
}
