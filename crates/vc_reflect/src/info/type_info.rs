use core::fmt;

use crate::info::{ArrayInfo, ClassInfo, CollectionInfo, EnumInfo, InterfaceInfo, MapInfo};
use crate::info::{PrimitiveInfo, Type};

// -----------------------------------------------------------------------------
// TypeKind

/// The shape of a [`TypeInfo`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Primitive,
    Enum,
    Array,
    Collection,
    Map,
    Class,
    Interface,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Primitive => "a primitive",
            Self::Enum => "an enum",
            Self::Array => "an array",
            Self::Collection => "a collection",
            Self::Map => "a map",
            Self::Class => "a class",
            Self::Interface => "an interface",
        };
        f.write_str(name)
    }
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information of a reflectable type.
///
/// The variants are the serialization paths: every type takes exactly one.
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Primitive(PrimitiveInfo),
    Enum(EnumInfo),
    Array(ArrayInfo),
    Collection(CollectionInfo),
    Map(MapInfo),
    Class(ClassInfo),
    Interface(InterfaceInfo),
}

impl TypeInfo {
    pub const fn ty(&self) -> Type {
        match self {
            Self::Primitive(info) => info.ty(),
            Self::Enum(info) => info.ty(),
            Self::Array(info) => info.ty(),
            Self::Collection(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Class(info) => info.ty(),
            Self::Interface(info) => info.ty(),
        }
    }

    pub const fn kind(&self) -> TypeKind {
        match self {
            Self::Primitive(_) => TypeKind::Primitive,
            Self::Enum(_) => TypeKind::Enum,
            Self::Array(_) => TypeKind::Array,
            Self::Collection(_) => TypeKind::Collection,
            Self::Map(_) => TypeKind::Map,
            Self::Class(_) => TypeKind::Class,
            Self::Interface(_) => TypeKind::Interface,
        }
    }

    #[inline]
    pub const fn as_primitive(&self) -> Option<&PrimitiveInfo> {
        match self {
            Self::Primitive(info) => Some(info),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_enum(&self) -> Option<&EnumInfo> {
        match self {
            Self::Enum(info) => Some(info),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_array(&self) -> Option<&ArrayInfo> {
        match self {
            Self::Array(info) => Some(info),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_collection(&self) -> Option<&CollectionInfo> {
        match self {
            Self::Collection(info) => Some(info),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_map(&self) -> Option<&MapInfo> {
        match self {
            Self::Map(info) => Some(info),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_class(&self) -> Option<&ClassInfo> {
        match self {
            Self::Class(info) => Some(info),
            _ => None,
        }
    }
}
