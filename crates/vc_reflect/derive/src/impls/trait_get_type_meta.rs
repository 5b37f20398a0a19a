use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `GetTypeMeta` trait.
///
/// Every field type (and the base class) is registered as a dependency.
pub(crate) fn impl_trait_get_type_meta(meta: &ReflectMeta) -> TokenStream {
    let vc_reflect_path = meta.vc_reflect_path();
    let get_type_meta_ = crate::path::get_type_meta_(vc_reflect_path);
    let type_meta_ = crate::path::type_meta_(vc_reflect_path);
    let from_type_ = crate::path::from_type_(vc_reflect_path);
    let type_registry_ = crate::path::type_registry_(vc_reflect_path);

    let insert_default = match meta.attrs().default {
        Some(span) => {
            let type_trait_default_ = crate::path::type_trait_default_(vc_reflect_path);
            quote_spanned! { span =>
                #type_meta_::insert_trait::<#type_trait_default_>(&mut meta, #from_type_::<Self>::from_type());
            }
        }
        None => crate::utils::empty(),
    };

    let register_deps = if meta.active_types().is_empty() {
        crate::utils::empty()
    } else {
        let types = meta.active_types();
        quote! {
            fn register_dependencies(registry: &mut #type_registry_) {
                #( #type_registry_::register::<#types>(registry); )*
            }
        }
    };

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #get_type_meta_ for #ident #ty_generics #where_clause {
            fn get_type_meta() -> #type_meta_ {
                let mut meta = #type_meta_::of::<Self>();
                #insert_default
                meta
            }

            #register_deps
        }
    }
}
