use crate::aot::AotMetadata;
use crate::info::{FieldInfo, Type};
use crate::provider::{LiveReflection, ReflectionProvider};
use crate::registry::TypeRegistry;

/// The reflection backend for targets where element types are erased.
///
/// Live reflection always answers first; the AOT tables only fill the
/// gaps it leaves, they never override a live answer.
///
/// # Examples
///
/// ```
/// use vc_reflect::Reflect;
/// use vc_reflect::aot::{AotClassData, AotFieldData, AotMetadata};
/// use vc_reflect::impls::DynamicList;
/// use vc_reflect::info::Type;
/// use vc_reflect::provider::{AotReflection, ReflectionProvider};
/// use vc_reflect::registry::TypeRegistry;
///
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Inventory {
///     items: DynamicList,
/// }
///
/// let metadata = AotMetadata::new().with_class(
///     AotClassData::new::<Inventory>()
///         .with_field(AotFieldData::new("items").with_element::<String>()),
/// );
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Inventory>();
/// metadata.register_types(&mut registry);
///
/// let provider = AotReflection::new(&registry, &metadata);
/// let field = provider.class_info(Type::of::<Inventory>()).unwrap().field("items").unwrap();
/// assert_eq!(provider.element_type(field, 0), Some(Type::of::<String>()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AotReflection<'a> {
    live: LiveReflection<'a>,
    metadata: &'a AotMetadata,
}

impl<'a> AotReflection<'a> {
    #[inline]
    pub const fn new(registry: &'a TypeRegistry, metadata: &'a AotMetadata) -> Self {
        Self {
            live: LiveReflection::new(registry),
            metadata,
        }
    }

    #[inline(always)]
    pub const fn metadata(&self) -> &'a AotMetadata {
        self.metadata
    }
}

impl ReflectionProvider for AotReflection<'_> {
    #[inline]
    fn registry(&self) -> &TypeRegistry {
        self.live.registry()
    }

    fn element_type(&self, field: &FieldInfo, index: usize) -> Option<Type> {
        if let Some(ty) = self.live.element_type(field, index) {
            return Some(ty);
        }
        let ty = self
            .metadata
            .class_data(field.declaring())?
            .field_data(field.name())?
            .element_type(index)?;
        log::debug!(
            "element {index} of `{}::{}` resolved from AOT metadata as `{ty}`",
            field.declaring(),
            field.name(),
        );
        Some(ty)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::AotReflection;
    use crate::Reflect;
    use crate::aot::{AotClassData, AotFieldData, AotMetadata};
    use crate::impls::{DynamicList, DynamicMap};
    use crate::info::Type;
    use crate::provider::{LiveReflection, ReflectionProvider};
    use crate::registry::TypeRegistry;

    #[derive(Reflect, Default)]
    #[reflect(default)]
    struct Bag {
        typed: Vec<u8>,
        erased: DynamicList,
        lookup: DynamicMap,
    }

    fn metadata() -> AotMetadata {
        AotMetadata::new().with_class(
            AotClassData::new::<Bag>()
                .with_field(AotFieldData::new("typed").with_element::<String>())
                .with_field(AotFieldData::new("erased").with_element::<i64>())
                .with_field(
                    AotFieldData::new("lookup")
                        .with_element::<String>()
                        .with_element::<BTreeMap<String, bool>>(),
                ),
        )
    }

    #[test]
    fn live_answers_win() {
        let metadata = metadata();
        let mut registry = TypeRegistry::new();
        registry.register::<Bag>();
        metadata.register_types(&mut registry);

        let live = LiveReflection::new(&registry);
        let aot = AotReflection::new(&registry, &metadata);
        let class = aot.class_info(Type::of::<Bag>()).unwrap();

        let typed = class.field("typed").unwrap();
        assert_eq!(aot.element_type(typed, 0), Some(Type::of::<u8>()));

        let erased = class.field("erased").unwrap();
        assert_eq!(live.element_type(erased, 0), None);
        assert_eq!(aot.element_type(erased, 0), Some(Type::of::<i64>()));
        assert_eq!(aot.element_type(erased, 1), None);

        let lookup = class.field("lookup").unwrap();
        assert_eq!(aot.element_type(lookup, 1), Some(Type::of::<BTreeMap<String, bool>>()));
        assert!(registry.contains(core::any::TypeId::of::<BTreeMap<String, bool>>()));
    }
}
