//! Errors raised while binding command-line arguments.

use clap::error::ErrorKind;
use clap::parser::MatchesError;
use thiserror::Error;

/// Errors that can occur while binding arguments onto a record.
///
/// Every variant carries the synthesized usage text so entry points can show
/// it alongside the diagnostic.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SflagError {
    /// A standalone `true` or `false` token was found while boolean flags are
    /// registered.
    #[error(
        "boolean flags require \"--Name=value\" syntax; found standalone argument `{token}`"
    )]
    AmbiguousBool {
        /// The offending token as it appeared on the command line.
        token: String,
        /// Synthesized usage text.
        usage: String,
    },

    /// The argument parser rejected the command line, or help was requested.
    #[error("failed to parse command-line arguments: {source}")]
    CliParsing {
        /// Underlying parser error.
        #[source]
        source: Box<clap::Error>,
        /// Synthesized usage text.
        usage: String,
    },

    /// A registered flag's value could not be read back after parsing.
    #[error("failed to read value for `--{name}`: {source}")]
    Binding {
        /// Flag whose value could not be read.
        name: &'static str,
        /// Underlying lookup error.
        #[source]
        source: MatchesError,
        /// Synthesized usage text.
        usage: String,
    },
}

impl SflagError {
    /// Synthesized usage text for the record being bound.
    #[must_use]
    pub fn usage(&self) -> &str {
        match self {
            Self::AmbiguousBool { usage, .. }
            | Self::CliParsing { usage, .. }
            | Self::Binding { usage, .. } => usage,
        }
    }

    /// Returns `true` when the error is a `--help` request rather than a
    /// failure.
    ///
    /// Entry points should print the usage text and exit successfully in this
    /// case.
    #[must_use]
    pub fn is_display_request(&self) -> bool {
        matches!(
            self,
            Self::CliParsing { source, .. }
                if matches!(source.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
        )
    }
}
