use crate::derive_data::ReflectMeta;

/// Generate `auto_register` implementation
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(meta: &ReflectMeta) -> proc_macro2::TokenStream {
    use quote::quote_spanned;

    if let Some(span) = meta.attrs().auto_register {
        // Invalid for generic types.
        if meta.impl_with_generic() {
            return crate::utils::empty();
        }

        let vc_reflect_path = meta.vc_reflect_path();
        let macro_exports_ = crate::path::macro_exports_(vc_reflect_path);
        let type_registry_ = crate::path::type_registry_(vc_reflect_path);
        let ident = meta.ident();

        quote_spanned! { span =>
            #macro_exports_::inventory::submit!{
                #macro_exports_::AutoRegistration(#type_registry_::register::<#ident>)
            }
        }
    } else {
        crate::utils::empty()
    }
}

/// Generate `auto_register` implementation
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &ReflectMeta) -> proc_macro2::TokenStream {
    crate::utils::empty()
}
