use syn::spanned::Spanned;
use syn::{Data, DeriveInput};

use super::{ReflectEnum, ReflectMeta, ReflectStruct, TypeAttributes};

/// The parsed input of `#[derive(Reflect)]`.
pub(crate) enum ReflectDerive<'a> {
    Class(ReflectStruct<'a>),
    Enum(ReflectEnum<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let meta = ReflectMeta::new(attrs, &input.ident, &input.generics);

        match &input.data {
            Data::Struct(data) => {
                ReflectStruct::new(meta, &data.fields, input.ident.span()).map(Self::Class)
            }
            Data::Enum(data) => ReflectEnum::new(meta, data, input.ident.span()).map(Self::Enum),
            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span(),
                "unions cannot be reflected",
            )),
        }
    }
}
