//! Precomputed element types for targets without generic metadata.
//!
//! Live reflection recovers the element type of a container field from the
//! field's declared type. A type-erased container such as
//! [`DynamicList`](crate::impls::DynamicList) does not carry one, so the
//! reader needs a table built ahead of time:
//!
//! ```text
//! AotMetadata ── class ──> AotClassData ── field name ──> AotFieldData ── index ──> Type
//! ```
//!
//! Tables are built once, either with the builder API or, with the
//! `auto_register` feature, from [`aot_metadata!`](crate::aot_metadata)
//! submissions collected by [`AotMetadata::collect`]. They are read-only
//! afterwards and can be shared between threads.

use alloc::vec::Vec;
use core::any::TypeId;

use crate::hash::{HashMap, TypeIdMap};
use crate::info::Type;
use crate::registry::{GetTypeMeta, TypeRegistry};

type Registrar = fn(&mut TypeRegistry);

// -----------------------------------------------------------------------------
// AotFieldData

/// The element types of one field, by generic parameter index.
#[derive(Debug, Clone)]
pub struct AotFieldData {
    name: &'static str,
    element_types: Vec<Type>,
    registrars: Vec<Registrar>,
}

impl AotFieldData {
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            element_types: Vec::new(),
            registrars: Vec::new(),
        }
    }

    /// Appends the next element type: the list element or map key first,
    /// then the map value.
    pub fn with_element<T: GetTypeMeta>(mut self) -> Self {
        self.element_types.push(Type::of::<T>());
        self.registrars.push(TypeRegistry::register::<T>);
        self
    }

    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn element_type(&self, index: usize) -> Option<Type> {
        self.element_types.get(index).copied()
    }

    #[inline]
    pub fn element_types(&self) -> &[Type] {
        &self.element_types
    }
}

// -----------------------------------------------------------------------------
// AotClassData

/// The field tables of one class, indexed by field name.
#[derive(Debug, Clone)]
pub struct AotClassData {
    ty: Type,
    fields: HashMap<&'static str, AotFieldData>,
}

impl AotClassData {
    #[inline]
    pub fn new<T: ?Sized + 'static>() -> Self {
        Self::of(Type::of::<T>())
    }

    #[inline]
    pub fn of(ty: Type) -> Self {
        Self {
            ty,
            fields: HashMap::default(),
        }
    }

    /// Adds a field table, replacing the one with the same name.
    pub fn with_field(mut self, field: AotFieldData) -> Self {
        self.insert_field(field);
        self
    }

    pub fn insert_field(&mut self, field: AotFieldData) {
        self.fields.insert(field.name, field);
    }

    #[inline(always)]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    #[inline]
    pub fn field_data(&self, name: &str) -> Option<&AotFieldData> {
        self.fields.get(name)
    }

    #[inline]
    pub fn fields(&self) -> impl Iterator<Item = &AotFieldData> {
        self.fields.values()
    }
}

// -----------------------------------------------------------------------------
// AotMetadata

/// The AOT tables of every class, indexed by type.
#[derive(Debug, Default)]
pub struct AotMetadata {
    classes: TypeIdMap<AotClassData>,
}

impl AotMetadata {
    #[inline]
    pub const fn new() -> Self {
        Self {
            classes: TypeIdMap::new(),
        }
    }

    pub fn with_class(mut self, class: AotClassData) -> Self {
        self.insert(class);
        self
    }

    /// Adds a class table, merging its fields into an existing one.
    pub fn insert(&mut self, class: AotClassData) {
        match self.classes.get_mut(&class.ty.id()) {
            Some(existing) => existing.fields.extend(class.fields),
            None => {
                self.classes.insert(class.ty.id(), class);
            }
        }
    }

    #[inline]
    pub fn class_data(&self, ty: Type) -> Option<&AotClassData> {
        self.classes.get(&ty.id())
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.classes.contains(&type_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Registers every element type named by the tables.
    pub fn register_types(&self, registry: &mut TypeRegistry) {
        for class in self.classes.values() {
            for field in class.fields.values() {
                for register in &field.registrars {
                    register(registry);
                }
            }
        }
    }

    /// Builds the tables from every [`aot_metadata!`](crate::aot_metadata) submission.
    #[cfg(feature = "auto_register")]
    pub fn collect() -> Self {
        let mut metadata = Self::new();
        for entry in inventory::iter::<AotEntry> {
            let mut field = AotFieldData::new(entry.field);
            for (ty, register) in entry.elements {
                field.element_types.push(ty());
                field.registrars.push(*register);
            }
            metadata.insert(AotClassData::of((entry.class)()).with_field(field));
        }
        log::debug!("collected AOT metadata of {} classes", metadata.len());
        metadata
    }
}

// -----------------------------------------------------------------------------
// Static submission

/// One field table submitted by [`aot_metadata!`](crate::aot_metadata).
#[cfg(feature = "auto_register")]
pub struct AotEntry {
    pub class: fn() -> Type,
    pub field: &'static str,
    pub elements: &'static [(fn() -> Type, Registrar)],
}

#[cfg(feature = "auto_register")]
inventory::collect!(AotEntry);

/// Submits AOT field tables, collected by [`AotMetadata::collect`].
///
/// ```
/// # use vc_reflect::{Reflect, aot_metadata};
/// # use vc_reflect::aot::AotMetadata;
/// # use vc_reflect::impls::{DynamicList, DynamicMap};
/// # use vc_reflect::info::Type;
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Save {
///     names: DynamicList,
///     scores: DynamicMap,
/// }
///
/// aot_metadata! {
///     Save {
///         names => String;
///         scores => String, u32;
///     }
/// }
///
/// let metadata = AotMetadata::collect();
/// let save = metadata.class_data(Type::of::<Save>()).unwrap();
/// assert_eq!(save.field_data("scores").unwrap().element_type(1), Some(Type::of::<u32>()));
/// ```
#[cfg(feature = "auto_register")]
#[macro_export]
macro_rules! aot_metadata {
    ($($class:ty { $($field:ident => $($elem:ty),+ ;)* })*) => {
        $($(
            $crate::__macro_exports::inventory::submit! {
                $crate::aot::AotEntry {
                    class: $crate::info::Type::of::<$class> as fn() -> $crate::info::Type,
                    field: ::core::stringify!($field),
                    elements: &[$((
                        $crate::info::Type::of::<$elem> as fn() -> $crate::info::Type,
                        $crate::registry::TypeRegistry::register::<$elem> as fn(&mut $crate::registry::TypeRegistry),
                    )),+],
                }
            }
        )*)*
    };
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::{AotClassData, AotFieldData, AotMetadata};
    use crate::info::Type;
    use crate::registry::TypeRegistry;

    struct Holder;

    #[test]
    fn lookups_and_merge() {
        let mut metadata = AotMetadata::new()
            .with_class(AotClassData::new::<Holder>().with_field(AotFieldData::new("a").with_element::<u8>()));
        metadata.insert(AotClassData::new::<Holder>().with_field(AotFieldData::new("b").with_element::<String>()));

        assert_eq!(metadata.len(), 1);
        let class = metadata.class_data(Type::of::<Holder>()).unwrap();
        assert_eq!(class.field_data("a").unwrap().element_type(0), Some(Type::of::<u8>()));
        assert_eq!(class.field_data("b").unwrap().element_type(0), Some(Type::of::<String>()));
        assert!(class.field_data("c").is_none());
        assert!(metadata.class_data(Type::of::<u8>()).is_none());
    }

    #[test]
    fn register_named_types() {
        let metadata = AotMetadata::new().with_class(
            AotClassData::new::<Holder>().with_field(AotFieldData::new("v").with_element::<Vec<i16>>()),
        );
        let mut registry = TypeRegistry::empty();
        metadata.register_types(&mut registry);
        assert!(registry.contains(core::any::TypeId::of::<Vec<i16>>()));
        assert!(registry.contains(core::any::TypeId::of::<i16>()));
    }
}
