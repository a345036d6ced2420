//! Binding-table entries describing a record's fields.
//!
//! A [`Field`] pairs the field's external name and raw annotation with a
//! [`Slot`]: a mutable reference to the field's storage, tagged with the
//! declared type. The derive macro emits one entry per supported field in
//! declaration order; hand-written implementations build the same table.

/// Name of the reserved field that receives the synthesized usage text.
pub const USAGE_FIELD: &str = "usage";

/// Mutable storage for one record field, tagged by its declared type.
#[derive(Debug)]
pub enum Slot<'a> {
    /// A text flag.
    Text(&'a mut String),
    /// A boolean flag, accepted only in `--name=value` form.
    Bool(&'a mut bool),
    /// A signed 64-bit integer flag.
    Int(&'a mut i64),
    /// A 64-bit floating point flag.
    Float(&'a mut f64),
    /// Receives the positional arguments left over after flag parsing.
    Positional(&'a mut Vec<String>),
    /// Receives the synthesized usage text.
    Usage(&'a mut String),
}

impl Slot<'_> {
    /// Type name shown in the usage text.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) | Self::Usage(_) => "String",
            Self::Bool(_) => "bool",
            Self::Int(_) => "i64",
            Self::Float(_) => "f64",
            Self::Positional(_) => "Vec<String>",
        }
    }
}

/// One entry of a record's binding table.
#[derive(Debug)]
pub struct Field<'a> {
    name: &'static str,
    annotation: &'static str,
    slot: Slot<'a>,
}

impl<'a> Field<'a> {
    /// Creates an entry for the field `name` carrying `annotation`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sflag::{Field, Slot};
    ///
    /// let mut iq = 0_i64;
    /// let field = Field::new("iq", "do not inflate | 42", Slot::Int(&mut iq));
    /// assert_eq!(field.name(), "iq");
    /// ```
    #[must_use]
    pub const fn new(name: &'static str, annotation: &'static str, slot: Slot<'a>) -> Self {
        Self {
            name,
            annotation,
            slot,
        }
    }

    /// External flag name; identical to the field name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Raw annotation text, untrimmed.
    #[must_use]
    pub const fn annotation(&self) -> &'static str {
        self.annotation
    }

    /// Splits the entry into its parts, handing out the storage reference.
    pub(crate) const fn into_parts(self) -> (&'static str, &'static str, Slot<'a>) {
        (self.name, self.annotation, self.slot)
    }
}

/// Types whose fields can be bound to command-line flags.
///
/// Usually derived:
///
/// ```
/// use sflag::Sflag;
///
/// #[derive(Default, Sflag)]
/// struct Opts {
///     #[sflag("sflag demonstrator")]
///     usage: String,
///     #[sflag("do not inflate | 42")]
///     iq: i64,
///     args: Vec<String>,
/// }
///
/// let mut opts = Opts::default();
/// sflag::try_parse_from(&mut opts, ["demo", "--iq", "7", "rest"]).unwrap();
/// assert_eq!(opts.iq, 7);
/// assert_eq!(opts.args, ["rest"]);
/// ```
pub trait Sflag {
    /// Returns the binding table in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;
}
