use alloc::boxed::Box;
use core::any::TypeId;
use core::fmt;
use core::ops::Deref;

use crate::hash::TypeIdMap;
use crate::info::{Type, TypeInfo, Typed};
use crate::registry::{TypeRegistry, TypeTrait};

// -----------------------------------------------------------------------------
// TypeMeta

/// The registry entry of one type: its [`TypeInfo`] and its [`TypeTrait`] table.
pub struct TypeMeta {
    ty: Type,
    type_info: &'static TypeInfo,
    trait_table: TypeIdMap<Box<dyn TypeTrait>>,
}

impl TypeMeta {
    #[inline]
    pub fn of<T: Typed>() -> Self {
        let type_info = T::type_info();
        Self {
            ty: type_info.ty(),
            type_info,
            trait_table: TypeIdMap::new(),
        }
    }

    #[inline(always)]
    pub const fn type_info(&self) -> &'static TypeInfo {
        self.type_info
    }

    #[inline(always)]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    #[inline(always)]
    pub fn type_id(&self) -> TypeId {
        self.ty.id()
    }

    /// Builder form of [`TypeMeta::insert_trait`].
    #[inline]
    pub fn with_trait<T: TypeTrait>(mut self, data: T) -> Self {
        self.insert_trait(data);
        self
    }

    /// Inserts a type trait, replacing any previous one of the same type.
    #[inline(always)]
    pub fn insert_trait<T: TypeTrait>(&mut self, data: T) {
        self.insert_trait_by_id(TypeId::of::<T>(), Box::new(data));
    }

    #[inline(never)]
    fn insert_trait_by_id(&mut self, id: TypeId, val: Box<dyn TypeTrait>) {
        self.trait_table.insert(id, val);
    }

    #[inline]
    pub fn get_trait<T: TypeTrait>(&self) -> Option<&T> {
        self.trait_table
            .get(&TypeId::of::<T>())
            .map(Deref::deref)
            .and_then(<dyn TypeTrait>::downcast_ref)
    }

    #[inline]
    pub fn has_trait<T: TypeTrait>(&self) -> bool {
        self.trait_table.contains(&TypeId::of::<T>())
    }

    #[inline]
    pub fn trait_len(&self) -> usize {
        self.trait_table.len()
    }
}

impl fmt::Debug for TypeMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMeta")
            .field("ty", &self.ty)
            .field("traits", &self.trait_table.len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// GetTypeMeta

/// Builds the [`TypeMeta`] of a type and registers the types it refers to.
///
/// Automatically implemented by [the derive macro].
///
/// [the derive macro]: crate::derive::Reflect
pub trait GetTypeMeta: Typed {
    fn get_type_meta() -> TypeMeta;

    /// Registers field, element and base types.
    #[inline(always)]
    fn register_dependencies(_registry: &mut TypeRegistry) {}
}
