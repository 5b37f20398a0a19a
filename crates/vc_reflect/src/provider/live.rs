use crate::info::{FieldInfo, Type, TypeInfo};
use crate::provider::ReflectionProvider;
use crate::registry::TypeRegistry;

/// The registry-backed reflection backend.
///
/// Element types are read from the declared type of the field, so they are
/// known for every statically typed container and unknown for type-erased
/// ones.
#[derive(Debug, Clone, Copy)]
pub struct LiveReflection<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> LiveReflection<'a> {
    #[inline]
    pub const fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }
}

impl ReflectionProvider for LiveReflection<'_> {
    #[inline]
    fn registry(&self) -> &TypeRegistry {
        self.registry
    }

    fn element_type(&self, field: &FieldInfo, index: usize) -> Option<Type> {
        match (self.registry.get_type_info(field.ty().id())?, index) {
            (TypeInfo::Collection(info), 0) => info.element(),
            (TypeInfo::Array(info), 0) => Some(info.element()),
            (TypeInfo::Map(info), 0) => info.key(),
            (TypeInfo::Map(info), 1) => info.value(),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::LiveReflection;
    use crate::info::{Type, Typed};
    use crate::provider::ReflectionProvider;
    use crate::registry::TypeRegistry;
    use crate::{Reflect, ReflectError};

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(default)]
    struct Base {
        id: u32,
        #[reflect(optional)]
        note: Option<String>,
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(default, post_deserialize = Self::after)]
    struct Derived {
        #[reflect(extends)]
        base: Base,
        tags: Vec<String>,
        scores: BTreeMap<String, f64>,
        hooked: bool,
    }

    impl Derived {
        fn after(&mut self) {
            self.hooked = true;
        }
    }

    #[derive(Reflect, Debug)]
    #[reflect(constructor = Self::new, args(x, y))]
    struct Point {
        x: i32,
        y: i32,
    }

    impl Point {
        fn new(x: i32, y: i32) -> Self {
            Self { x, y }
        }
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(default, post_deserialize = Self::after)]
    struct Tally {
        values: Vec<u32>,
        #[reflect(skip)]
        total: u32,
        #[reflect(skip)]
        runs: u32,
    }

    impl Tally {
        fn after(&mut self) {
            self.total = self.values.iter().sum();
            self.runs += 1;
        }
    }

    #[derive(Reflect, Default, Debug)]
    #[reflect(default, post_deserialize = Self::after)]
    struct Ledger {
        #[reflect(extends)]
        tally: Tally,
        label: String,
        #[reflect(skip)]
        base_runs_seen: u32,
        #[reflect(skip)]
        runs: u32,
    }

    impl Ledger {
        fn after(&mut self) {
            self.base_runs_seen = self.tally.runs;
            self.runs += 1;
        }
    }

    #[derive(Reflect, Default, Debug)]
    #[reflect(default)]
    struct Archive {
        #[reflect(extends)]
        tally: Tally,
        shelf: u8,
    }

    #[derive(Reflect, Default)]
    #[reflect(default)]
    struct Shadow {
        #[reflect(extends)]
        base: Base,
        id: u32,
    }

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.register::<Derived>();
        registry.register::<Point>();
        registry.register::<Ledger>();
        registry.register::<Archive>();
        registry
    }

    #[test]
    fn fields_walk_the_superclass_chain() {
        let registry = registry();
        let provider = LiveReflection::new(&registry);

        let names: Vec<&str> = provider
            .fields(Type::of::<Derived>())
            .unwrap()
            .iter()
            .map(|field| field.name())
            .collect();
        assert_eq!(names, ["id", "note", "tags", "scores", "hooked"]);
    }

    #[test]
    fn get_and_set_through_projection() {
        let registry = registry();
        let provider = LiveReflection::new(&registry);
        let class = provider.class_info(Type::of::<Derived>()).unwrap();

        let mut value = Derived::default();
        let id = class.field("id").unwrap();
        provider.set(id, &mut value, Some(7_u32.into_boxed_reflect())).unwrap();
        assert_eq!(value.base.id, 7);
        assert_eq!(
            provider.get(id, &value).unwrap().unwrap().downcast_ref::<u32>(),
            Some(&7)
        );

        let note = class.field("note").unwrap();
        assert!(provider.get(note, &value).unwrap().is_none());

        let err = provider.set(id, &mut value, None).unwrap_err();
        assert!(matches!(err, ReflectError::NotNullable { field: "id", .. }));

        let err = provider
            .set(id, &mut value, Some(String::from("7").into_boxed_reflect()))
            .unwrap_err();
        assert!(matches!(err, ReflectError::ValueMismatch { field: "id", .. }));

        let mut other = 1_u8;
        let err = provider.set(id, &mut other, Some(1_u32.into_boxed_reflect())).unwrap_err();
        assert!(matches!(err, ReflectError::InstanceMismatch { .. }));
    }

    #[test]
    fn element_types_from_declared_types() {
        let registry = registry();
        let provider = LiveReflection::new(&registry);
        let class = provider.class_info(Type::of::<Derived>()).unwrap();

        let tags = class.field("tags").unwrap();
        assert_eq!(provider.element_type(tags, 0), Some(Type::of::<String>()));
        assert_eq!(provider.element_type(tags, 1), None);

        let scores = class.field("scores").unwrap();
        assert_eq!(provider.element_type(scores, 0), Some(Type::of::<String>()));
        assert_eq!(provider.element_type(scores, 1), Some(Type::of::<f64>()));

        let id = class.field("id").unwrap();
        assert_eq!(provider.element_type(id, 0), None);
    }

    #[test]
    fn construction_paths() {
        let registry = registry();
        let provider = LiveReflection::new(&registry);

        let mut value = provider.new_instance(Type::of::<Derived>()).unwrap();
        assert!(provider.invoke_post_deserialize(value.as_mut()).unwrap());
        assert!(value.downcast_ref::<Derived>().unwrap().hooked);

        let mut base = provider.new_instance(Type::of::<Base>()).unwrap();
        assert!(!provider.invoke_post_deserialize(base.as_mut()).unwrap());

        let err = provider.new_instance(Type::of::<Point>()).unwrap_err();
        assert_eq!(err, ReflectError::NoDefaultConstructor(Type::of::<Point>()));

        let class = provider.class_info(Type::of::<Point>()).unwrap();
        let constructor = class.constructor().unwrap();
        let mut args = crate::info::ConstructorArgs::new(Type::of::<Point>());
        args.push(constructor.args()[0].name(), Some(3_i32.into_boxed_reflect()));
        args.push(constructor.args()[1].name(), Some(4_i32.into_boxed_reflect()));
        let point = provider.construct(Type::of::<Point>(), args).unwrap();
        let point = point.downcast_ref::<Point>().unwrap();
        assert_eq!((point.x, point.y), (3, 4));
    }

    #[test]
    fn hooks_run_base_first_once_each() {
        let registry = registry();
        let provider = LiveReflection::new(&registry);

        let mut ledger = Ledger::default();
        ledger.tally.values = Vec::from([2, 3]);
        assert!(provider.invoke_post_deserialize(&mut ledger).unwrap());
        assert_eq!(ledger.tally.runs, 1);
        assert_eq!(ledger.tally.total, 5);
        assert_eq!(ledger.runs, 1);
        assert_eq!(ledger.base_runs_seen, 1);
    }

    #[test]
    fn inherited_hook_runs_without_own_hook() {
        let registry = registry();
        let provider = LiveReflection::new(&registry);

        let mut archive = Archive::default();
        archive.tally.values = Vec::from([4]);
        assert!(provider.invoke_post_deserialize(&mut archive).unwrap());
        assert_eq!(archive.tally.runs, 1);
        assert_eq!(archive.tally.total, 4);
    }

    #[test]
    fn constructor_fields_are_final() {
        let registry = registry();
        let provider = LiveReflection::new(&registry);
        let class = provider.class_info(Type::of::<Point>()).unwrap();

        let x = class.field("x").unwrap();
        assert!(x.is_final());

        let mut point = Point::new(1, 2);
        let err = provider.set(x, &mut point, Some(5_i32.into_boxed_reflect())).unwrap_err();
        assert_eq!(
            err,
            ReflectError::FinalField {
                class: Type::of::<Point>(),
                field: "x",
            }
        );
        assert_eq!(point.x, 1);
    }

    #[test]
    #[should_panic(expected = "shadows a field")]
    fn shadowed_base_field_is_rejected() {
        let _ = Shadow::type_info();
    }

    #[test]
    fn providers_are_debug() {
        let registry = registry();
        let provider = LiveReflection::new(&registry);
        let text = alloc::format!("{provider:?}");
        assert!(text.starts_with("LiveReflection"));
        assert!(text.contains("TypeRegistry"));
    }

    #[test]
    fn arrays_independent_of_element_type() {
        let registry = {
            let mut registry = TypeRegistry::new();
            registry.register::<[u16; 2]>();
            registry
        };
        let provider = LiveReflection::new(&registry);
        let ty = Type::of::<[u16; 2]>();

        assert!(provider.is_array(ty));
        assert!(!provider.is_primitive_like(ty));
        assert_eq!(provider.array_element_type(ty).unwrap(), Type::of::<u16>());

        let mut array = provider
            .new_array(ty, Vec::from([Box::new(1_u16) as Box<dyn Reflect>, Box::new(2_u16)]))
            .unwrap();
        provider.array_set(array.as_mut(), 0, Box::new(9_u16)).unwrap();
        assert_eq!(provider.array_length(array.as_ref()).unwrap(), 2);
        assert_eq!(provider.array_get(array.as_ref(), 0).unwrap().downcast_ref::<u16>(), Some(&9));
    }
}
