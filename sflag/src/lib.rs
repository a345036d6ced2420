//! Command-line flags declared as annotated struct fields.
//!
//! Each field of a record becomes a flag named after the field. A per-field
//! annotation supplies the help text and, after a delimiter, the default
//! value; the field's type decides how the value is parsed. The derive lives
//! in the companion `sflag_macros` crate and is re-exported here.
//!
//! ```
//! use sflag::Sflag;
//!
//! #[derive(Debug, Default, Sflag)]
//! struct Opts {
//!     #[sflag("sflag demonstrator")]
//!     usage: String,
//!     #[sflag("contains the something | /dev/null")]
//!     some_file: String,
//!     #[sflag("do not inflate | 42")]
//!     iq: i64,
//!     #[sflag("in Vietnamese Dong | 42000000000000000000000000.0")]
//!     gdp: f64,
//!     #[sflag("! is a command that might contain a pipe ! 'yes | head'")]
//!     some_command: String,
//!     #[sflag("boolean flags need the equals form | false")]
//!     verbose: bool,
//!     args: Vec<String>,
//! }
//!
//! let mut opts = Opts::default();
//! sflag::try_parse_from(&mut opts, ["demo", "--iq=100", "--verbose", "a", "b"]).unwrap();
//! assert_eq!(opts.some_file, "/dev/null");
//! assert_eq!(opts.some_command, "'yes | head'");
//! assert_eq!(opts.iq, 100);
//! assert!(opts.verbose);
//! assert_eq!(opts.args, ["a", "b"]);
//! assert!(opts.usage.contains("--iq: 42 <-- Default, i64 # do not inflate"));
//! ```
//!
//! Boolean flags only accept `--name=value`; when any are declared, a
//! standalone `true` or `false` argument is rejected with
//! [`SflagError::AmbiguousBool`].

pub use sflag_macros::Sflag;

mod annotation;
mod bind;
mod convert;
mod error;
mod field;
mod registry;
mod usage;

pub use annotation::Annotation;
pub use bind::{parse, try_parse, try_parse_from, usage};
pub use convert::parse_bool_literal;
pub use error::SflagError;
pub use field::{Field, Sflag, Slot, USAGE_FIELD};
