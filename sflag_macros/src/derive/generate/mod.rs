//! Token generation for the `Sflag` implementation.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use super::parse::{FieldSpec, Record};

/// Renders one binding-table entry.
fn field_entry(spec: &FieldSpec, krate: &TokenStream) -> TokenStream {
    let ident = &spec.ident;
    let name = &spec.name;
    let annotation = &spec.annotation;
    let variant = Ident::new(spec.kind.slot_variant(), Span::call_site());
    quote! {
        #krate::Field::new(#name, #annotation, #krate::Slot::#variant(&mut self.#ident))
    }
}

/// Renders `impl Sflag for <record>`.
pub(crate) fn sflag_impl(record: &Record, krate: &TokenStream) -> TokenStream {
    let ident = &record.ident;
    let (impl_generics, ty_generics, where_clause) = record.generics.split_for_impl();
    let entries = record
        .fields
        .iter()
        .map(|spec| field_entry(spec, krate));
    quote! {
        impl #impl_generics #krate::Sflag for #ident #ty_generics #where_clause {
            fn fields(&mut self) -> ::std::vec::Vec<#krate::Field<'_>> {
                ::std::vec![ #( #entries ),* ]
            }
        }
    }
}

#[cfg(test)]
mod tests;
