use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn type_info_cell_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::impls::TypeInfoCell
    }
}

#[inline(always)]
pub(crate) fn generic_type_info_cell_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::impls::GenericTypeInfoCell
    }
}
