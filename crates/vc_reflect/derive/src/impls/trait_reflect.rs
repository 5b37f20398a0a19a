use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Reflect` trait.
///
/// Derived types are concrete objects, so `resolve` returns `self`.
pub(crate) fn impl_trait_reflect(meta: &ReflectMeta) -> TokenStream {
    let reflect_ = crate::path::reflect_(meta.vc_reflect_path());

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #[inline(always)]
            fn resolve(&self) -> &dyn #reflect_ {
                self
            }

            #[inline(always)]
            fn resolve_mut(&mut self) -> &mut dyn #reflect_ {
                self
            }
        }
    }
}
