use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectEnum;

/// Implement reflection for a unit-only enum.
pub(crate) fn impl_enum(info: &ReflectEnum) -> TokenStream {
    let meta = info.meta();
    let vc_reflect_path = meta.vc_reflect_path();

    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let macro_exports_ = crate::path::macro_exports_(vc_reflect_path);
    let type_info_ = crate::path::type_info_(vc_reflect_path);
    let enum_info_ = crate::path::enum_info_(vc_reflect_path);

    let idents: Vec<_> = info.variants().iter().map(|(ident, _)| *ident).collect();
    let names: Vec<_> = info.variants().iter().map(|(_, name)| name).collect();

    let type_info_tokens = quote! {
        #type_info_::Enum(#enum_info_::new::<Self>(
            &[ #( #names ),* ],
            Self::__vc_reflect_variant_name,
            Self::__vc_reflect_from_variant,
        ))
    };

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    let reflect_impl = super::impl_trait_reflect(meta);
    let typed_impl = super::impl_trait_typed(meta, type_info_tokens);
    let get_type_meta_impl = super::impl_trait_get_type_meta(meta);
    let auto_register = super::get_auto_register_impl(meta);

    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #[doc(hidden)]
            fn __vc_reflect_variant_name(value: &dyn #reflect_) -> ::core::option::Option<&'static str> {
                match value.downcast_ref::<Self>()? {
                    #( Self::#idents => ::core::option::Option::Some(#names), )*
                }
            }

            #[doc(hidden)]
            fn __vc_reflect_from_variant(
                name: &str,
            ) -> ::core::option::Option<#macro_exports_::Box<dyn #reflect_>> {
                match name {
                    #( #names => ::core::option::Option::Some(#reflect_::into_boxed_reflect(Self::#idents)), )*
                    _ => ::core::option::Option::None,
                }
            }
        }

        #reflect_impl

        #typed_impl

        #get_type_meta_impl

        #auto_register
    }
}
