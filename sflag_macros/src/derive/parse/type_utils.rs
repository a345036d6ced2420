//! Type introspection helpers.
//!
//! Recognition is shallow and by final path segment, so `String`,
//! `std::string::String` and `alloc::string::String` all match.

use syn::{GenericArgument, PathArguments, Type};

/// Declared-type category of a bound field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FieldKind {
    Text,
    Bool,
    Int,
    Float,
    Positional,
    Usage,
}

impl FieldKind {
    /// Classifies `ty`, returning `None` for unsupported types.
    pub(crate) fn of(ty: &Type) -> Option<Self> {
        let segment = last_segment(ty)?;
        let ident = segment.ident.to_string();
        match (ident.as_str(), &segment.arguments) {
            ("String", PathArguments::None) => Some(Self::Text),
            ("bool", PathArguments::None) => Some(Self::Bool),
            ("i64", PathArguments::None) => Some(Self::Int),
            ("f64", PathArguments::None) => Some(Self::Float),
            ("Vec", args) => {
                let inner = first_type_argument(args)?;
                (Self::of(inner)? == Self::Text).then_some(Self::Positional)
            }
            _ => None,
        }
    }

    /// `Slot` variant the field is bound through.
    pub(crate) const fn slot_variant(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Bool => "Bool",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Positional => "Positional",
            Self::Usage => "Usage",
        }
    }
}

fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    let Type::Path(p) = ty else {
        return None;
    };
    if p.qself.is_some() {
        return None;
    }
    p.path.segments.last()
}

/// Extract the first type argument from a `PathArguments` container.
fn first_type_argument(args: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(angle_args) = args else {
        return None;
    };
    let first = angle_args.args.first()?;
    let GenericArgument::Type(inner) = first else {
        return None;
    };
    Some(inner)
}
