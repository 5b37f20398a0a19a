use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::{Fields, Ident, Type};

use super::{FieldAttributes, ReflectMeta};

/// A reflected field of a struct.
pub(crate) struct StructField<'a> {
    /// The field ident as written, possibly raw.
    pub ident: &'a Ident,
    /// The wire name.
    pub name: String,
    /// The declared type, `T` for an `Option<T>` field.
    pub ty: &'a Type,
    /// The field is an `Option<T>`.
    pub nullable: bool,
    pub attrs: FieldAttributes,
    /// Position in the constructor parameter list.
    pub constructor_index: Option<usize>,
}

impl StructField<'_> {
    #[inline]
    pub fn is_final(&self) -> bool {
        self.constructor_index.is_some()
    }
}

/// A struct with named fields (or no fields), reflected as a class.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
    superclass: Option<(&'a Ident, &'a Type)>,
}

impl<'a> ReflectStruct<'a> {
    pub fn new(mut meta: ReflectMeta<'a>, fields: &'a Fields, span: Span) -> syn::Result<Self> {
        let named = match fields {
            Fields::Named(named) => Some(&named.named),
            Fields::Unit => None,
            Fields::Unnamed(_) => {
                return Err(syn::Error::new(
                    span,
                    "tuple structs cannot be reflected, fields need names",
                ));
            }
        };

        let mut reflected = Vec::new();
        let mut superclass = None;

        for field in named.into_iter().flatten() {
            let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            if attrs.skip.is_some() {
                continue;
            }
            let Some(ident) = field.ident.as_ref() else {
                continue;
            };

            if let Some(extends) = attrs.extends {
                if superclass.is_some() {
                    return Err(syn::Error::new(extends, "a class has at most one base class"));
                }
                meta.add_active_type(&field.ty);
                superclass = Some((ident, &field.ty));
                continue;
            }

            let (ty, nullable) = match crate::utils::option_inner(&field.ty) {
                Some(inner) => (inner, true),
                None => (&field.ty, false),
            };

            if let Some(optional) = attrs.optional
                && !nullable
            {
                return Err(syn::Error::new(
                    optional,
                    "only an `Option<T>` field can be optional",
                ));
            }

            meta.add_active_type(ty);
            reflected.push(StructField {
                ident,
                name: ident.unraw().to_string(),
                ty,
                nullable,
                attrs,
                constructor_index: None,
            });
        }

        for (index, arg) in meta.attrs().constructor_args().iter().enumerate() {
            let Some(field) = reflected.iter_mut().find(|field| *field.ident == *arg) else {
                return Err(syn::Error::new(
                    arg.span(),
                    format_args!("constructor argument `{arg}` matches no reflected field of this struct"),
                ));
            };
            field.constructor_index = Some(index);
        }

        Ok(Self {
            meta,
            fields: reflected,
            superclass,
        })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// The reflected fields declared on this struct, in declaration order.
    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// The constructor-bound fields, in parameter order.
    pub fn constructor_fields(&self) -> Vec<&StructField<'a>> {
        let mut bound: Vec<&StructField<'a>> =
            self.fields.iter().filter(|field| field.is_final()).collect();
        bound.sort_by_key(|field| field.constructor_index);
        bound
    }

    /// The `#[reflect(extends)]` field and its type.
    #[inline]
    pub fn superclass(&self) -> Option<(&'a Ident, &'a Type)> {
        self.superclass
    }
}
