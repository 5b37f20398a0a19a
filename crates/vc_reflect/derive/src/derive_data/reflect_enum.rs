use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{DataEnum, Fields, Ident};

use super::ReflectMeta;

/// A unit-only enum, reflected by variant name.
pub(crate) struct ReflectEnum<'a> {
    meta: ReflectMeta<'a>,
    variants: Vec<(&'a Ident, String)>,
}

impl<'a> ReflectEnum<'a> {
    pub fn new(meta: ReflectMeta<'a>, data: &'a DataEnum, span: Span) -> syn::Result<Self> {
        meta.attrs().reject_class_only("enums")?;

        if data.variants.is_empty() {
            return Err(syn::Error::new(span, "an enum without variants cannot be reflected"));
        }

        let variants = data
            .variants
            .iter()
            .map(|variant| match variant.fields {
                Fields::Unit => Ok((&variant.ident, variant.ident.unraw().to_string())),
                _ => Err(syn::Error::new(
                    variant.span(),
                    "only unit variants can be reflected",
                )),
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self { meta, variants })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Variant idents with their wire names, in declaration order.
    #[inline]
    pub fn variants(&self) -> &[(&'a Ident, String)] {
        &self.variants
    }
}
