//! Containers for static storage of type information.
//!
//! This is usually used to implement [`Typed`](crate::info::Typed).
//!
//! - [`TypeInfoCell`]: for non generic types, an [`OnceLock`] around the info.
//! - [`GenericTypeInfoCell`]: for generic types. The `static CELL` inside a
//!   generic function is shared by every instantiation, so the cell holds a
//!   [`TypeIdMap`] of leaked infos behind a [`RwLock`].
//!
//! Both follow the same discipline: the info is built once, published, and
//! never mutated afterwards. Readers only take the lock for the lookup.

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::hash::TypeIdMap;
use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// TypeInfoCell

/// Static storage of a non generic type's [`TypeInfo`].
///
/// # Examples
///
/// ```
/// # use vc_reflect::impls::TypeInfoCell;
/// # use vc_reflect::info::{ClassInfo, TypeInfo, Typed};
/// # use vc_reflect::Reflect;
/// struct Empty;
/// # impl Reflect for Empty {
/// #     fn resolve(&self) -> &dyn Reflect { self }
/// #     fn resolve_mut(&mut self) -> &mut dyn Reflect { self }
/// # }
///
/// impl Typed for Empty {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: TypeInfoCell = TypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Class(ClassInfo::new::<Self>(Vec::new())))
///     }
/// }
/// # assert!(Empty::type_info().as_class().is_some());
/// ```
pub struct TypeInfoCell(OnceLock<TypeInfo>);

impl TypeInfoCell {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericTypeInfoCell

/// Static storage of a generic type's [`TypeInfo`], one per instantiation.
///
/// # Examples
///
/// ```
/// # use vc_reflect::impls::GenericTypeInfoCell;
/// # use vc_reflect::info::{ClassInfo, TypeInfo, Typed};
/// # use vc_reflect::Reflect;
/// struct Wrapper<T>(T);
/// # impl<T: Send + Sync + 'static> Reflect for Wrapper<T> {
/// #     fn resolve(&self) -> &dyn Reflect { self }
/// #     fn resolve_mut(&mut self) -> &mut dyn Reflect { self }
/// # }
///
/// impl<T: Send + Sync + 'static> Typed for Wrapper<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| TypeInfo::Class(ClassInfo::new::<Self>(Vec::new())))
///     }
/// }
/// # assert_ne!(Wrapper::<u8>::type_info().ty(), Wrapper::<u16>::type_info().ty());
/// ```
pub struct GenericTypeInfoCell(RwLock<TypeIdMap<&'static TypeInfo>>);

impl GenericTypeInfoCell {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            // `f` runs outside the lock: building an info may read other cells.
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: TypeInfo) -> &'static TypeInfo {
        let mut table = self.0.write().unwrap_or_else(PoisonError::into_inner);
        *table.get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}
