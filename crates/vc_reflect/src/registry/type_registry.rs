use alloc::string::String;
use core::any::TypeId;
use core::fmt;

use crate::adapter::{CollectionAdapter, Implementation, MapAdapter};
use crate::hash::{HashMap, TypeIdMap};
use crate::info::{Type, TypeInfo, Typed};
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTrait};

// -----------------------------------------------------------------------------
// TypeRegistry

/// The table of every type the serializer may meet.
///
/// A registry is built once by the application, then shared by reference
/// with any number of serialize and deserialize calls. Nothing mutates it
/// during those calls, so a `&TypeRegistry` can be used from many threads.
///
/// Besides one [`TypeMeta`] per type, the registry holds the
/// interface-to-implementation table consulted when a field is declared
/// through an interface box.
///
/// # Examples
///
/// ```
/// use vc_reflect::registry::TypeRegistry;
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Vec<String>>();
///
/// assert!(registry.contains(core::any::TypeId::of::<Vec<String>>()));
/// assert!(registry.get_with_type_path("alloc::string::String").is_some());
/// ```
pub struct TypeRegistry {
    type_meta_table: TypeIdMap<TypeMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    implementations: TypeIdMap<Implementation>,
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.type_meta_table.len())
            .field("implementations", &self.implementations.len())
            .finish_non_exhaustive()
    }
}

impl Default for TypeRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Creates a registry without any type.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            type_meta_table: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(crate::hash::FixedHashState),
            implementations: TypeIdMap::new(),
        }
    }

    /// Creates a registry holding the primitive types.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<bool>();
        registry.register::<char>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<u128>();
        registry.register::<usize>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<i128>();
        registry.register::<isize>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<String>();
        registry
    }

    // - If key [`TypeId`] has already exist, the function will do nothing and return `false`.
    // - If the key [`TypeId`] does not exist, the function will insert value and return `true`.
    fn register_internal(&mut self, type_id: TypeId, get_type_meta: impl FnOnce() -> TypeMeta) -> bool {
        let type_path_to_id = &mut self.type_path_to_id;
        self.type_meta_table.try_insert(type_id, || {
            let meta = get_type_meta();
            type_path_to_id.insert(meta.ty().path(), meta.type_id());
            meta
        })
    }

    /// Registers `T` and, on first registration, every type it refers to.
    pub fn register<T: GetTypeMeta>(&mut self) {
        if self.register_internal(TypeId::of::<T>(), T::get_type_meta) {
            T::register_dependencies(self);
        }
    }

    /// Inserts a [`TypeMeta`], replacing the previous entry of the type.
    pub fn insert_type_meta(&mut self, type_meta: TypeMeta) {
        self.type_path_to_id
            .insert(type_meta.ty().path(), type_meta.type_id());
        if let Some(old) = self.type_meta_table.insert(type_meta.type_id(), type_meta) {
            log::warn!("replaced the registration of `{}`", old.ty());
        }
    }

    /// Registers every type marked `#[reflect(auto_register)]`.
    ///
    /// Returns `false` when static registration is not compiled in.
    #[cfg(feature = "auto_register")]
    pub fn auto_register(&mut self) -> bool {
        for registration in inventory::iter::<crate::__macro_exports::AutoRegistration> {
            (registration.0)(self);
        }
        true
    }

    /// Registers every type marked `#[reflect(auto_register)]`.
    ///
    /// Returns `false` when static registration is not compiled in.
    #[cfg(not(feature = "auto_register"))]
    #[inline(always)]
    pub fn auto_register(&mut self) -> bool {
        false
    }

    /// Adds a type trait to an already registered type.
    ///
    /// # Panics
    ///
    /// Panics if `T` is not registered.
    pub fn register_type_trait<T: Typed, D: TypeTrait + FromType<T>>(&mut self) {
        match self.type_meta_table.get_mut(&TypeId::of::<T>()) {
            Some(type_meta) => type_meta.insert_trait(D::from_type()),
            None => panic!(
                "Called `TypeRegistry::register_type_trait`, but the type `{}` of type_trait `{}` without registering",
                Type::of::<T>(),
                core::any::type_name::<D>(),
            ),
        }
    }

    /// Declares `C` as the concrete type built for interface `I`.
    ///
    /// `wrap` turns the concrete value into the interface box, usually
    /// `|c| Box::new(c)`. Both types are registered.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_reflect::{Reflect, impl_reflect_interface};
    /// use vc_reflect::registry::TypeRegistry;
    ///
    /// trait Shape: Reflect {}
    /// impl_reflect_interface!(dyn Shape);
    ///
    /// #[derive(Reflect, Default)]
    /// #[reflect(default)]
    /// struct Square {
    ///     side: f32,
    /// }
    /// impl Shape for Square {}
    ///
    /// let mut registry = TypeRegistry::new();
    /// registry.register_implementation::<Box<dyn Shape>, Square>(|s| Box::new(s));
    ///
    /// let ty = vc_reflect::info::Type::of::<Box<dyn Shape>>();
    /// assert!(registry.fallback_concrete_type(ty).unwrap().is::<Square>());
    /// ```
    pub fn register_implementation<I: GetTypeMeta, C: GetTypeMeta>(&mut self, wrap: fn(C) -> I) {
        self.register::<I>();
        self.register::<C>();
        let implementation = Implementation::new::<I, C>(wrap);
        if let Some(old) = self.implementations.insert(TypeId::of::<I>(), implementation) {
            log::warn!(
                "interface `{}` was implemented by `{}`, now by `{}`",
                old.interface(),
                old.concrete(),
                Type::of::<C>(),
            );
        }
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains(&type_id)
    }

    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    #[inline]
    pub fn get_mut(&mut self, type_id: TypeId) -> Option<&mut TypeMeta> {
        self.type_meta_table.get_mut(&type_id)
    }

    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    #[inline]
    pub fn get_type_info(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.get(type_id).map(TypeMeta::type_info)
    }

    #[inline]
    pub fn get_type_trait<T: TypeTrait>(&self, type_id: TypeId) -> Option<&T> {
        match self.get(type_id) {
            Some(type_meta) => type_meta.get_trait::<T>(),
            None => None,
        }
    }

    /// The adapter of a sequence or set container.
    #[inline]
    pub fn adapter_for(&self, ty: Type) -> Option<&CollectionAdapter> {
        self.get_type_trait::<CollectionAdapter>(ty.id())
    }

    /// The adapter of a key-value container.
    #[inline]
    pub fn map_adapter_for(&self, ty: Type) -> Option<&MapAdapter> {
        self.get_type_trait::<MapAdapter>(ty.id())
    }

    /// The implementation registered for an interface.
    #[inline]
    pub fn implementation_for(&self, ty: Type) -> Option<&Implementation> {
        self.implementations.get(&ty.id())
    }

    /// The concrete type built when a field is declared as interface `ty`.
    #[inline]
    pub fn fallback_concrete_type(&self, ty: Type) -> Option<Type> {
        self.implementation_for(ty).map(Implementation::concrete)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.type_meta_table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.type_meta_table.is_empty()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::any::TypeId;

    use super::TypeRegistry;
    use crate::adapter::AdapterKind;
    use crate::info::Type;
    use crate::registry::TypeTraitDefault;

    #[test]
    fn new_registers_primitives() {
        let registry = TypeRegistry::new();
        assert!(registry.contains(TypeId::of::<i32>()));
        assert!(registry.contains(TypeId::of::<String>()));
        assert!(!registry.contains(TypeId::of::<Vec<i32>>()));
    }

    #[test]
    fn register_pulls_in_dependencies() {
        let mut registry = TypeRegistry::empty();
        registry.register::<BTreeMap<String, Vec<u8>>>();

        assert!(registry.contains(TypeId::of::<String>()));
        assert!(registry.contains(TypeId::of::<Vec<u8>>()));
        assert!(registry.contains(TypeId::of::<u8>()));
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn containers_carry_adapters() {
        let mut registry = TypeRegistry::new();
        registry.register::<Vec<u8>>();
        registry.register::<Vec<String>>();
        registry.register::<BTreeMap<String, i32>>();

        let bytes = registry.adapter_for(Type::of::<Vec<u8>>()).unwrap();
        assert_eq!(bytes.kind(), AdapterKind::PrimitiveArray(crate::info::PrimitiveKind::U8));
        let strings = registry.adapter_for(Type::of::<Vec<String>>()).unwrap();
        assert_eq!(strings.kind(), AdapterKind::List);

        let map = registry.map_adapter_for(Type::of::<BTreeMap<String, i32>>()).unwrap();
        assert_eq!(map.kind(), AdapterKind::OrderedMap);
        assert!(registry.adapter_for(Type::of::<BTreeMap<String, i32>>()).is_none());

        let default = registry
            .get_type_trait::<TypeTraitDefault>(TypeId::of::<Vec<u8>>())
            .unwrap();
        assert!(default.default().is::<Vec<u8>>());
    }
}
