use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::derive_data::{ReflectStruct, StructField};

/// Implement reflection for a struct with named fields.
///
/// Besides the three traits, a hidden inherent impl holds the accessor
/// functions referenced by the `ClassInfo`: a getter and (unless the field
/// is bound by the constructor) a setter per field, the base class
/// projections, the constructor shim and the post-deserialize hook.
pub(crate) fn impl_class(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let vc_reflect_path = meta.vc_reflect_path();

    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let macro_exports_ = crate::path::macro_exports_(vc_reflect_path);
    let access_error_ = crate::path::access_error_(vc_reflect_path);
    let reflect_error_ = crate::path::reflect_error_(vc_reflect_path);
    let type_info_ = crate::path::type_info_(vc_reflect_path);
    let class_info_ = crate::path::class_info_(vc_reflect_path);
    let field_info_ = crate::path::field_info_(vc_reflect_path);
    let field_flags_ = crate::path::field_flags_(vc_reflect_path);
    let constructor_info_ = crate::path::constructor_info_(vc_reflect_path);
    let constructor_arg_ = crate::path::constructor_arg_(vc_reflect_path);
    let constructor_args_ = crate::path::constructor_args_(vc_reflect_path);

    let mut accessors = Vec::new();
    let mut field_infos = Vec::new();

    for field in info.fields() {
        let StructField {
            ident, name, ty, ..
        } = field;
        let getter = format_ident!("__vc_reflect_get_{}", name);

        let read = if field.nullable {
            quote! {
                ::core::option::Option::Some(
                    this.#ident.as_ref().map(|value| value as &dyn #reflect_)
                )
            }
        } else {
            quote! {
                ::core::option::Option::Some(::core::option::Option::Some(&this.#ident as &dyn #reflect_))
            }
        };

        accessors.push(quote! {
            #[doc(hidden)]
            fn #getter(
                instance: &dyn #reflect_,
            ) -> ::core::option::Option<::core::option::Option<&dyn #reflect_>> {
                let this = instance.downcast_ref::<Self>()?;
                #read
            }
        });

        let with_setter = if field.is_final() {
            crate::utils::empty()
        } else {
            let setter = format_ident!("__vc_reflect_set_{}", name);
            let take = if field.nullable {
                quote!(take_nullable_field)
            } else {
                quote!(take_field)
            };

            accessors.push(quote! {
                #[doc(hidden)]
                fn #setter(
                    instance: &mut dyn #reflect_,
                    value: ::core::option::Option<#macro_exports_::Box<dyn #reflect_>>,
                ) -> ::core::result::Result<(), #access_error_> {
                    let this = instance
                        .downcast_mut::<Self>()
                        .ok_or(#access_error_::Instance)?;
                    this.#ident = #macro_exports_::#take::<#ty>(value)?;
                    ::core::result::Result::Ok(())
                }
            });
            quote!(.with_setter(Self::#setter))
        };

        let with_flags = match (field.nullable, field.attrs.optional.is_some()) {
            (true, true) => quote!(.with_flags(#field_flags_::NULLABLE | #field_flags_::OPTIONAL)),
            (true, false) => quote!(.with_flags(#field_flags_::NULLABLE)),
            _ => crate::utils::empty(),
        };

        field_infos.push(quote! {
            #field_info_::new::<Self, #ty>(#name, Self::#getter)
                #with_setter
                #with_flags
        });
    }

    let with_superclass = match info.superclass() {
        Some((ident, ty)) => {
            accessors.push(quote! {
                #[doc(hidden)]
                fn __vc_reflect_base(instance: &dyn #reflect_) -> ::core::option::Option<&dyn #reflect_> {
                    instance
                        .downcast_ref::<Self>()
                        .map(|this| &this.#ident as &dyn #reflect_)
                }

                #[doc(hidden)]
                fn __vc_reflect_base_mut(
                    instance: &mut dyn #reflect_,
                ) -> ::core::option::Option<&mut dyn #reflect_> {
                    instance
                        .downcast_mut::<Self>()
                        .map(|this| &mut this.#ident as &mut dyn #reflect_)
                }
            });
            quote! {
                .with_superclass::<#ty>(Self::__vc_reflect_base, Self::__vc_reflect_base_mut)
            }
        }
        None => crate::utils::empty(),
    };

    let with_constructor = match &meta.attrs().constructor {
        Some(constructor) => {
            let bound = info.constructor_fields();
            let count = bound.len();
            let names = bound.iter().map(|field| &field.name);
            let types = bound.iter().map(|field| field.ty);
            let locals: Vec<_> = (0..count).map(|index| format_ident!("__arg_{}", index)).collect();
            let takes = bound.iter().enumerate().map(|(index, field)| {
                let ty = field.ty;
                if field.nullable {
                    quote!(#constructor_args_::take_nullable::<#ty>(args, #index)?)
                } else {
                    quote!(#constructor_args_::take::<#ty>(args, #index)?)
                }
            });

            accessors.push(quote! {
                #[doc(hidden)]
                fn __vc_reflect_construct(
                    args: &mut #constructor_args_,
                ) -> ::core::result::Result<#macro_exports_::Box<dyn #reflect_>, #reflect_error_> {
                    #( let #locals = #takes; )*
                    ::core::result::Result::Ok(#reflect_::into_boxed_reflect(#constructor(#(#locals),*)))
                }
            });
            quote! {
                .with_constructor(#constructor_info_::new(
                    {
                        let args: [#constructor_arg_; #count] = [
                            #( #constructor_arg_::new::<#types>(#names) ),*
                        ];
                        args
                    },
                    Self::__vc_reflect_construct,
                ))
            }
        }
        None => crate::utils::empty(),
    };

    let with_post_deserialize = match &meta.attrs().post_deserialize {
        Some(hook) => {
            accessors.push(quote! {
                #[doc(hidden)]
                fn __vc_reflect_post_deserialize(instance: &mut dyn #reflect_) {
                    if let ::core::option::Option::Some(this) = instance.downcast_mut::<Self>() {
                        #hook(this);
                    }
                }
            });
            quote!(.with_post_deserialize(Self::__vc_reflect_post_deserialize))
        }
        None => crate::utils::empty(),
    };

    let field_count = field_infos.len();
    let type_info_tokens = quote! {
        let fields: [#field_info_; #field_count] = [ #( #field_infos ),* ];
        #type_info_::Class(
            #class_info_::new::<Self>(fields)
                #with_superclass
                #with_constructor
                #with_post_deserialize
        )
    };

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    let reflect_impl = super::impl_trait_reflect(meta);
    let typed_impl = super::impl_trait_typed(meta, type_info_tokens);
    let get_type_meta_impl = super::impl_trait_get_type_meta(meta);
    let auto_register = super::get_auto_register_impl(meta);

    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #( #accessors )*
        }

        #reflect_impl

        #typed_impl

        #get_type_meta_impl

        #auto_register
    }
}
