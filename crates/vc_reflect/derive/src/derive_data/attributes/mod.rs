//! Provide some tools for parsing `#[reflect(...)]` attributes.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use type_attributes::TypeAttributes;

use proc_macro2::Span;
use syn::meta::ParseNestedMeta;

/// Records a flag attribute, rejecting repeats.
fn set_flag(slot: &mut Option<Span>, meta: &ParseNestedMeta) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format_args!(
            "duplicate `{}` attribute",
            crate::utils::path_name(&meta.path),
        )));
    }
    *slot = Some(meta.path.segments[0].ident.span());
    Ok(())
}
