//! Per-call flag registry over `clap`'s builder API.
//!
//! Every binding call builds a fresh [`Registry`] so repeated calls within one
//! process never observe each other's flags. After parsing, the registry
//! writes the matched values back through the `&mut` references it holds.

use clap::parser::MatchesError;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

use crate::convert::parse_bool_literal;

/// Argument id collecting leftover positional tokens. Field names are Rust
/// identifiers, so a hyphenated id cannot clash with a flag.
const POSITIONAL_ID: &str = "sflag-positional";
const HELP_ID: &str = "sflag-help";

/// Storage a registered flag writes into.
#[derive(Debug)]
pub(crate) enum Binding<'a> {
    Text(&'a mut String),
    Bool(&'a mut bool),
    Int(&'a mut i64),
    Float(&'a mut f64),
}

/// A named flag bound to a field's storage.
#[derive(Debug)]
pub(crate) struct FlagRegistration<'a> {
    name: &'static str,
    binding: Binding<'a>,
    default: String,
    help: String,
}

impl<'a> FlagRegistration<'a> {
    /// `default` is the rendered resolved default; blank registers none.
    pub(crate) const fn new(
        name: &'static str,
        binding: Binding<'a>,
        default: String,
        help: String,
    ) -> Self {
        Self {
            name,
            binding,
            default,
            help,
        }
    }

    fn arg(&self) -> Arg {
        let base = Arg::new(self.name)
            .long(self.name)
            .help(self.help.clone())
            .action(ArgAction::Set);
        let typed = match self.binding {
            // `--name value` would leave `value` looking like a positional.
            Binding::Bool(_) => base
                .num_args(0..=1)
                .require_equals(true)
                .default_missing_value("true")
                .value_parser(parse_bool_literal),
            Binding::Text(_) => base
                .allow_hyphen_values(true)
                .value_parser(value_parser!(String)),
            Binding::Int(_) => base
                .allow_hyphen_values(true)
                .value_parser(value_parser!(i64)),
            Binding::Float(_) => base
                .allow_hyphen_values(true)
                .value_parser(value_parser!(f64)),
        };
        if self.default.is_empty() {
            typed
        } else {
            typed.default_value(self.default.clone())
        }
    }

    /// Copies the matched value, if any, into the bound field.
    fn apply(self, matches: &ArgMatches) -> Result<(), MatchesError> {
        match self.binding {
            Binding::Text(value) => {
                if let Some(text) = matches.try_get_one::<String>(self.name)? {
                    value.clone_from(text);
                }
            }
            Binding::Bool(value) => {
                if let Some(flag) = matches.try_get_one::<bool>(self.name)? {
                    *value = *flag;
                }
            }
            Binding::Int(value) => {
                if let Some(number) = matches.try_get_one::<i64>(self.name)? {
                    *value = *number;
                }
            }
            Binding::Float(value) => {
                if let Some(number) = matches.try_get_one::<f64>(self.name)? {
                    *value = *number;
                }
            }
        }
        Ok(())
    }
}

/// A flag whose parsed value could not be read back.
#[derive(Debug)]
pub(crate) struct UnreadFlag {
    pub(crate) name: &'static str,
    pub(crate) source: MatchesError,
}

/// Flags registered for a single binding call.
#[derive(Debug, Default)]
pub(crate) struct Registry<'a> {
    flags: Vec<FlagRegistration<'a>>,
    has_bool: bool,
}

impl<'a> Registry<'a> {
    pub(crate) fn register(&mut self, registration: FlagRegistration<'a>) {
        if matches!(registration.binding, Binding::Bool(_)) {
            self.has_bool = true;
        }
        tracing::debug!(
            flag = registration.name,
            default = %registration.default,
            "registered flag"
        );
        self.flags.push(registration);
    }

    /// Whether any boolean flag has been registered.
    pub(crate) const fn has_bool(&self) -> bool {
        self.has_bool
    }

    fn claims(&self, name: &str) -> bool {
        self.flags.iter().any(|flag| flag.name == name)
    }

    /// Builds the parser for `program`, rendering `usage` as its help.
    pub(crate) fn command(&self, program: &str, usage: &str) -> Command {
        let help = Arg::new(HELP_ID).short('h').action(ArgAction::Help);
        let help_flag = if self.claims("help") {
            help
        } else {
            help.long("help")
        };
        Command::new(program.to_owned())
            .disable_help_flag(true)
            .disable_version_flag(true)
            .args_override_self(true)
            .override_help(usage.to_owned())
            .args(self.flags.iter().map(FlagRegistration::arg))
            .arg(help_flag)
            .arg(
                Arg::new(POSITIONAL_ID)
                    .num_args(1..)
                    .trailing_var_arg(true)
                    .action(ArgAction::Append)
                    .value_parser(value_parser!(String)),
            )
    }

    /// Writes every matched value into its field.
    pub(crate) fn apply(self, matches: &ArgMatches) -> Result<(), UnreadFlag> {
        for flag in self.flags {
            let name = flag.name;
            flag.apply(matches)
                .map_err(|source| UnreadFlag { name, source })?;
        }
        Ok(())
    }
}

/// Returns the unconsumed positional tokens in order.
pub(crate) fn positional(matches: &ArgMatches) -> Result<Vec<String>, MatchesError> {
    Ok(matches
        .try_get_many::<String>(POSITIONAL_ID)?
        .map(|values| values.cloned().collect())
        .unwrap_or_default())
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests panic to surface parser construction mistakes"
)]
mod tests {
    use super::{Binding, FlagRegistration, Registry, positional};
    use rstest::rstest;

    fn parse(registry: &Registry<'_>, args: &[&str]) -> clap::ArgMatches {
        registry
            .command("prog", "usage text")
            .try_get_matches_from(args)
            .expect("arguments should parse")
    }

    #[rstest]
    fn bool_flag_requires_equals() {
        let mut verbose = false;
        let mut registry = Registry::default();
        registry.register(FlagRegistration::new(
            "verbose",
            Binding::Bool(&mut verbose),
            "false".to_owned(),
            String::new(),
        ));
        assert!(registry.has_bool());
        let matches = parse(&registry, &["prog", "--verbose", "rest"]);
        assert_eq!(positional(&matches).expect("positional"), ["rest"]);
        registry.apply(&matches).expect("apply");
        assert!(verbose);
    }

    #[rstest]
    fn negative_numbers_are_values() {
        let mut offset = 0_i64;
        let mut registry = Registry::default();
        registry.register(FlagRegistration::new(
            "offset",
            Binding::Int(&mut offset),
            "0".to_owned(),
            String::new(),
        ));
        assert!(!registry.has_bool());
        let matches = parse(&registry, &["prog", "--offset", "-12"]);
        registry.apply(&matches).expect("apply");
        assert_eq!(offset, -12);
    }

    #[rstest]
    fn repeated_flag_keeps_last_value() {
        let mut name = String::new();
        let mut registry = Registry::default();
        registry.register(FlagRegistration::new(
            "name",
            Binding::Text(&mut name),
            String::new(),
            String::new(),
        ));
        let matches = parse(&registry, &["prog", "--name=a", "--name", "b"]);
        registry.apply(&matches).expect("apply");
        assert_eq!(name, "b");
    }

    #[rstest]
    fn help_request_is_reported() {
        let registry = Registry::default();
        let err = registry
            .command("prog", "usage text")
            .try_get_matches_from(["prog", "--help"])
            .expect_err("help should short-circuit");
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
