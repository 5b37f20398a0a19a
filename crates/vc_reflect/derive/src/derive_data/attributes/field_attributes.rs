use proc_macro2::Span;
use syn::Attribute;
use syn::meta::ParseNestedMeta;

use crate::REFLECT_ATTRIBUTE_NAME;

/// Field level `#[reflect(...)]` attributes.
#[derive(Default, Clone, Copy)]
pub(crate) struct FieldAttributes {
    /// `skip`: the field is invisible to reflection.
    pub skip: Option<Span>,
    /// `optional`: a null value is written as an empty node.
    pub optional: Option<Span>,
    /// `extends`: the field holds the base class.
    pub extends: Option<Span>,
}

impl FieldAttributes {
    /// Parse all `#[reflect(...)]` attributes of a field.
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }
        this.validity()?;
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("skip") {
            super::set_flag(&mut self.skip, &meta)
        } else if meta.path.is_ident("optional") {
            super::set_flag(&mut self.optional, &meta)
        } else if meta.path.is_ident("extends") {
            super::set_flag(&mut self.extends, &meta)
        } else {
            Err(meta.error(format_args!(
                "unsupported field attribute `{}`, expected one of `skip`, `optional`, `extends`",
                crate::utils::path_name(&meta.path),
            )))
        }
    }

    fn validity(&self) -> syn::Result<()> {
        if let Some(span) = self.skip
            && (self.optional.is_some() || self.extends.is_some())
        {
            return Err(syn::Error::new(span, "a skipped field takes no other attribute"));
        }
        if let (Some(span), Some(_)) = (self.optional, self.extends) {
            return Err(syn::Error::new(span, "the base class field cannot be optional"));
        }
        Ok(())
    }
}
