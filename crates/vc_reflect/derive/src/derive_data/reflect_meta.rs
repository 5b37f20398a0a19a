use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, Ident, ImplGenerics, Path, Type, TypeGenerics};

use super::TypeAttributes;

/// What every generated impl needs to know about the type.
pub(crate) struct ReflectMeta<'a> {
    vc_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
    // Declaration order, so the generated code is stable across builds.
    active_types: Vec<Type>,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("vc_reflect_path", &self.vc_reflect_path.to_token_stream())
            .field("ident", &self.ident)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            attrs,
            ident,
            generics,
            vc_reflect_path: crate::path::vc_reflect(),
            active_types: Vec::new(),
        }
    }

    /// Records the type of a reflected field, used for the `where` clause
    /// and for dependency registration.
    pub(super) fn add_active_type(&mut self, ty: &Type) {
        if !self.active_types.contains(ty) {
            self.active_types.push(ty.clone());
        }
    }

    #[inline]
    pub fn vc_reflect_path(&self) -> &Path {
        &self.vc_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn ident(&self) -> &'a Ident {
        self.ident
    }

    /// The field types in declaration order, each listed once.
    #[inline]
    pub fn active_types(&self) -> &[Type] {
        &self.active_types
    }

    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.generics.type_params().next().is_some() || self.generics.const_params().next().is_some()
    }

    /// Return the required generic parameters.
    ///
    /// The three parameters returned are `impl_generics`, `ty_generics`, `where_clause`.
    /// The same clause is used by every generated impl.
    ///
    /// ## Type Itself
    ///
    /// If it has lifetime params, needs to be labeled with `'static`.
    /// If it has type generic params, needs to be labeled with `Any + Send + Sync`.
    ///
    /// ## Field Type (with type param)
    ///
    /// Each field type mentioning a type param requires `GetTypeMeta`,
    /// which implies `Typed + Reflect`.
    pub fn split_generics(&self) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        let generics = self.generics;

        let mut generic_where_clause = quote! { where };

        if generics.type_params().next().is_some() {
            generic_where_clause.extend(quote! {
                Self: ::core::any::Any + ::core::marker::Send + ::core::marker::Sync,
            });
        } else if generics.lifetimes().next().is_some() {
            generic_where_clause.extend(quote! { Self: 'static, });
        }

        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        // Maintain existing where clause bounds, if any.
        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            generic_where_clause.extend(quote! { #(#predicates,)* });
        }

        let type_param_idents: Vec<Ident> = generics
            .type_params()
            .map(|type_param| type_param.ident.clone())
            .collect();

        if !type_param_idents.is_empty() {
            let get_type_meta_ = crate::path::get_type_meta_(&self.vc_reflect_path);
            for ty in &self.active_types {
                if crate::utils::mentions_any(&type_param_idents, ty.to_token_stream()) {
                    generic_where_clause.extend(quote! { #ty: #get_type_meta_, });
                }
            }
        }

        (impl_generics, ty_generics, generic_where_clause)
    }
}
