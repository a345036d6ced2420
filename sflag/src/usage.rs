//! Synthesis of the consolidated usage message.

/// Accumulates one listing line per bindable field.
#[derive(Debug, Default)]
pub(crate) struct UsageBuilder {
    lines: String,
}

impl UsageBuilder {
    /// Appends the listing line for a bound flag.
    pub(crate) fn push(
        &mut self,
        name: &str,
        default_text: &str,
        type_name: &str,
        description: &str,
    ) {
        self.lines.push_str(&format!(
            "\n\t--{name}: {default_text} <-- Default, {type_name} # {description}"
        ));
    }

    /// Composes the final text under a header naming `program`.
    ///
    /// `header` is the usage field's annotation, verbatim.
    pub(crate) fn finish(self, program: &str, header: &str) -> String {
        format!("\n Usage of {program} # {header}\n ARGS:{}", self.lines)
    }
}
