//! The binding engine: walks a record's fields, registers flags, parses the
//! command line and writes results back.

use std::ffi::OsString;

use crate::annotation::Annotation;
use crate::convert;
use crate::error::SflagError;
use crate::field::{Field, Sflag, Slot, USAGE_FIELD};
use crate::registry::{self, Binding, FlagRegistration, Registry};
use crate::usage::UsageBuilder;

/// State gathered from one pass over a record's binding table.
#[derive(Debug, Default)]
struct Walk<'a> {
    registry: Registry<'a>,
    lines: UsageBuilder,
    header: &'static str,
    usage_slot: Option<&'a mut String>,
    positional: Option<(&'static str, &'a mut Vec<String>)>,
}

impl<'a> Walk<'a> {
    fn over<T: Sflag + ?Sized>(record: &'a mut T) -> Self {
        let mut walk = Self::default();
        for field in record.fields() {
            walk.visit(field);
        }
        walk
    }

    fn visit(&mut self, field: Field<'a>) {
        let (name, annotation, slot) = field.into_parts();
        match slot {
            Slot::Usage(text) => {
                self.header = annotation;
                self.usage_slot = Some(text);
            }
            Slot::Positional(args) => {
                if self.positional.replace((name, args)).is_some() {
                    tracing::warn!(
                        field = name,
                        "several positional fields declared; the last one receives arguments"
                    );
                }
            }
            _ if name == USAGE_FIELD => {
                tracing::debug!(field = name, "skipping reserved usage field");
            }
            scalar => self.bind_scalar(name, annotation, scalar),
        }
    }

    fn bind_scalar(&mut self, name: &'static str, annotation: &str, slot: Slot<'a>) {
        let Some(parsed) = Annotation::parse(annotation) else {
            return;
        };
        let type_name = slot.type_name();
        let Some((binding, default)) = seed(name, slot, parsed.default) else {
            return;
        };
        self.lines
            .push(name, parsed.default_text(), type_name, parsed.description);
        let help = format!("<-- Default, {type_name} # {}", parsed.description);
        self.registry
            .register(FlagRegistration::new(name, binding, default, help));
    }
}

/// Pre-seeds the field from `default` and renders the value to register.
///
/// Without default text the field keeps its current value, which becomes the
/// registered default.
fn seed<'a>(
    name: &str,
    slot: Slot<'a>,
    default: Option<&str>,
) -> Option<(Binding<'a>, String)> {
    match slot {
        Slot::Text(value) => {
            if let Some(text) = default {
                text.clone_into(value);
            }
            let rendered = value.clone();
            Some((Binding::Text(value), rendered))
        }
        Slot::Bool(value) => {
            if let Some(text) = default {
                *value = convert::bool_default(name, text);
            }
            let rendered = value.to_string();
            Some((Binding::Bool(value), rendered))
        }
        Slot::Int(value) => {
            if let Some(text) = default {
                *value = convert::int_default(name, text);
            }
            let rendered = value.to_string();
            Some((Binding::Int(value), rendered))
        }
        Slot::Float(value) => {
            if let Some(text) = default {
                *value = convert::float_default(name, text);
            }
            let rendered = value.to_string();
            Some((Binding::Float(value), rendered))
        }
        Slot::Positional(_) | Slot::Usage(_) => None,
    }
}

fn program_name(args: &[OsString]) -> String {
    args.first()
        .map(|program| program.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Rejects standalone `true`/`false` tokens, which the parser would read as
/// positional arguments rather than boolean values.
fn reject_bare_bool(args: &[OsString], usage: &str) -> Result<(), SflagError> {
    args.iter()
        .map(|arg| arg.to_string_lossy())
        .find(|token| token.eq_ignore_ascii_case("true") || token.eq_ignore_ascii_case("false"))
        .map_or(Ok(()), |token| {
            Err(SflagError::AmbiguousBool {
                token: token.into_owned(),
                usage: usage.to_owned(),
            })
        })
}

/// Binds `args` onto `record`.
///
/// The first element of `args` is the program name. Annotated fields are
/// pre-seeded with their declared defaults, the usage field receives the
/// synthesized usage text, flags present in `args` overwrite their fields and
/// the positional field, if any, receives the leftover tokens.
///
/// # Errors
///
/// Returns [`SflagError::AmbiguousBool`] when boolean flags are declared and
/// `args` contains a standalone `true` or `false`, and
/// [`SflagError::CliParsing`] when the parser rejects `args` or help is
/// requested.
///
/// # Examples
///
/// ```
/// use sflag::Sflag;
///
/// #[derive(Default, Sflag)]
/// struct Opts {
///     #[sflag("n | bob")]
///     name: String,
/// }
///
/// let mut opts = Opts::default();
/// sflag::try_parse_from(&mut opts, ["prog"]).unwrap();
/// assert_eq!(opts.name, "bob");
///
/// sflag::try_parse_from(&mut opts, ["prog", "--name=alice"]).unwrap();
/// assert_eq!(opts.name, "alice");
/// ```
pub fn try_parse_from<T, I, A>(record: &mut T, args: I) -> Result<(), SflagError>
where
    T: Sflag + ?Sized,
    I: IntoIterator<Item = A>,
    A: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = program_name(&args);
    let Walk {
        registry,
        lines,
        header,
        usage_slot,
        positional,
    } = Walk::over(record);

    let usage = lines.finish(&program, header);
    if let Some(slot) = usage_slot {
        slot.clone_from(&usage);
    }

    if registry.has_bool() {
        reject_bare_bool(args.get(1..).unwrap_or_default(), &usage)?;
    }

    let matches = match registry.command(&program, &usage).try_get_matches_from(&args) {
        Ok(matches) => matches,
        Err(source) => {
            return Err(SflagError::CliParsing {
                source: Box::new(source),
                usage,
            });
        }
    };

    if let Err(unread) = registry.apply(&matches) {
        return Err(SflagError::Binding {
            name: unread.name,
            source: unread.source,
            usage,
        });
    }

    if let Some((name, target)) = positional {
        *target = registry::positional(&matches).map_err(|source| SflagError::Binding {
            name,
            source,
            usage,
        })?;
        tracing::debug!(count = target.len(), "collected positional arguments");
    }
    Ok(())
}

/// Binds the process arguments onto `record`.
///
/// # Errors
///
/// See [`try_parse_from`].
pub fn try_parse<T: Sflag + ?Sized>(record: &mut T) -> Result<(), SflagError> {
    try_parse_from(record, std::env::args_os())
}

/// Binds the process arguments onto `record`, exiting on failure.
///
/// A help request prints the usage text and exits with status 0. Any other
/// failure prints the diagnostic and the usage text to standard error and
/// exits with status 2.
pub fn parse<T: Sflag + ?Sized>(record: &mut T) {
    if let Err(err) = try_parse(record) {
        exit_with(err);
    }
}

#[expect(
    clippy::print_stderr,
    reason = "command-line entry point reports failures before exiting"
)]
fn exit_with(err: SflagError) -> ! {
    let help = err.is_display_request();
    match err {
        SflagError::CliParsing { source, usage } => {
            if !help {
                eprintln!("{usage}");
            }
            source.exit()
        }
        other => {
            eprintln!("{other}");
            eprintln!("{}", other.usage());
            std::process::exit(2)
        }
    }
}

/// Synthesizes the usage text for `record` without parsing any arguments.
///
/// Annotated defaults are seeded into their fields and the usage field
/// receives the text, exactly as during [`try_parse_from`].
#[must_use]
pub fn usage<T: Sflag + ?Sized>(record: &mut T, program: &str) -> String {
    let walk = Walk::over(record);
    let text = walk.lines.finish(program, walk.header);
    if let Some(slot) = walk.usage_slot {
        slot.clone_from(&text);
    }
    text
}
