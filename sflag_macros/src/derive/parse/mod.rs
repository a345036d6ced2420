//! Input parsing for the `Sflag` derive macro.
//!
//! Gathers the struct identifier, generics and a classified list of fields in
//! one pass so expansion can fail fast with spanned errors.

use syn::{Attribute, Data, DeriveInput, Fields, Generics, Ident, LitStr};

mod literals;
mod type_utils;

#[cfg(test)]
mod tests;

use literals::lit_str;
pub(crate) use type_utils::FieldKind;

/// Name of the field that receives the synthesized usage text.
const USAGE_FIELD: &str = "usage";

/// Struct-level `#[sflag(...)]` options.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    pub crate_path: Option<syn::Path>,
}

/// A field that appears in the generated binding table.
#[derive(Clone)]
pub(crate) struct FieldSpec {
    pub ident: Ident,
    /// External flag name: the identifier with any `r#` prefix removed.
    pub name: String,
    pub kind: FieldKind,
    /// Annotation text, empty when the field carries none.
    pub annotation: String,
}

/// Everything the generator needs from the derive input.
pub(crate) struct Record {
    pub ident: Ident,
    pub generics: Generics,
    pub attrs: StructAttrs,
    pub fields: Vec<FieldSpec>,
}

/// Iterate all `#[sflag(...)]` attributes.
fn sflag_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("sflag"))
}

/// Extracts `#[sflag(crate = "...")]` from the struct attributes.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    for attr in sflag_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let lit = lit_str(&meta, "crate")?;
                let path: syn::Path =
                    syn::parse_str(&lit.value()).map_err(|e| syn::Error::new(lit.span(), e))?;
                out.crate_path = Some(path);
                return Ok(());
            }
            Err(meta.error("unsupported sflag option on struct"))
        })?;
    }
    Ok(out)
}

/// Reads the annotation from `#[sflag("...")]`.
///
/// A field may carry at most one annotation.
pub(crate) fn parse_annotation(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut found: Option<LitStr> = None;
    for attr in sflag_attrs(attrs) {
        let lit = attr.parse_args::<LitStr>()?;
        if found.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "a field may carry only one sflag annotation",
            ));
        }
        found = Some(lit);
    }
    Ok(found)
}

fn classify(field: &syn::Field) -> syn::Result<Option<FieldSpec>> {
    let Some(ident) = field.ident.clone() else {
        return Ok(None);
    };
    let annotation = parse_annotation(&field.attrs)?;
    let name = syn::ext::IdentExt::unraw(&ident).to_string();
    let Some(detected) = FieldKind::of(&field.ty) else {
        return Ok(None);
    };
    let kind = if name == USAGE_FIELD {
        if detected != FieldKind::Text {
            return Ok(None);
        }
        FieldKind::Usage
    } else {
        detected
    };
    Ok(Some(FieldSpec {
        ident,
        name,
        kind,
        annotation: annotation.map(|lit| lit.value()).unwrap_or_default(),
    }))
}

/// Gathers information from the user-provided struct.
///
/// Rejects enums, unions and structs without named fields, and structs
/// declaring more than one positional field.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<Record> {
    let attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Sflag requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Sflag can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::new();
    for field in named {
        if let Some(spec) = classify(field)? {
            fields.push(spec);
        }
    }

    let mut positional = fields
        .iter()
        .filter(|spec| spec.kind == FieldKind::Positional);
    if let (Some(_), Some(extra)) = (positional.next(), positional.next()) {
        return Err(syn::Error::new_spanned(
            &extra.ident,
            "only one Vec<String> field may collect positional arguments",
        ));
    }

    Ok(Record {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        attrs,
        fields,
    })
}
