use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::info::{ArrayInfo, ClassInfo, ConstructorArgs, FieldInfo, Type, TypeInfo, TypeKind};
use crate::registry::{TypeRegistry, TypeTraitDefault};
use crate::{AccessError, Reflect, ReflectError};

/// Reflective access to registered types.
///
/// Only [`registry`](ReflectionProvider::registry) and
/// [`element_type`](ReflectionProvider::element_type) differ between
/// backends; everything else is derived from the registry.
///
/// Implementations hold no mutable state, so one provider can serve
/// concurrent serialize and deserialize calls.
pub trait ReflectionProvider: Send + Sync {
    fn registry(&self) -> &TypeRegistry;

    /// The generic element type of a container field.
    ///
    /// Index `0` is the element of a sequence or set and the key of a map,
    /// index `1` is the value of a map. `None` when the type cannot be
    /// recovered.
    fn element_type(&self, field: &FieldInfo, index: usize) -> Option<Type>;

    fn type_info(&self, ty: Type) -> Result<&'static TypeInfo, ReflectError> {
        self.registry()
            .get_type_info(ty.id())
            .ok_or(ReflectError::NotRegistered(ty))
    }

    fn class_info(&self, ty: Type) -> Result<&'static ClassInfo, ReflectError> {
        let info = self.type_info(ty)?;
        info.as_class().ok_or(ReflectError::KindMismatch {
            ty,
            expected: TypeKind::Class,
            actual: info.kind(),
        })
    }

    /// The serializable fields of a class, superclass fields first.
    fn fields(&self, ty: Type) -> Result<&'static [FieldInfo], ReflectError> {
        Ok(self.class_info(ty)?.fields())
    }

    /// Reads a field, `None` for null.
    ///
    /// `instance` may be of the declaring class or of any subclass.
    fn get<'a>(&self, field: &FieldInfo, instance: &'a dyn Reflect) -> Result<Option<&'a dyn Reflect>, ReflectError> {
        let mismatch = || ReflectError::InstanceMismatch {
            class: field.declaring(),
            field: field.name(),
            actual: instance.reflect_type(),
        };
        let target = project(self, field.declaring(), instance).ok_or_else(mismatch)?;
        (field.getter())(target).ok_or_else(mismatch)
    }

    /// Writes a field, `None` writes null.
    ///
    /// Final fields are rejected, they can only be bound by the constructor.
    fn set(
        &self,
        field: &FieldInfo,
        instance: &mut dyn Reflect,
        value: Option<Box<dyn Reflect>>,
    ) -> Result<(), ReflectError> {
        let (class, name) = (field.declaring(), field.name());
        let Some(setter) = field.setter() else {
            return Err(ReflectError::FinalField { class, field: name });
        };
        let actual = instance.reflect_type();
        let mismatch = ReflectError::InstanceMismatch {
            class,
            field: name,
            actual,
        };
        let target = project_mut(self, class, instance).ok_or(mismatch.clone())?;
        setter(target, value).map_err(|err| match err {
            AccessError::Instance => mismatch,
            AccessError::Null => ReflectError::NotNullable { class, field: name },
            AccessError::Value(actual) => ReflectError::ValueMismatch {
                class,
                field: name,
                actual,
            },
        })
    }

    /// Builds an instance through the zero-argument constructor.
    fn new_instance(&self, ty: Type) -> Result<Box<dyn Reflect>, ReflectError> {
        let meta = self.registry().get(ty.id()).ok_or(ReflectError::NotRegistered(ty))?;
        meta.get_trait::<TypeTraitDefault>()
            .map(TypeTraitDefault::default)
            .ok_or(ReflectError::NoDefaultConstructor(ty))
    }

    /// Builds an instance through the declared constructor.
    fn construct(&self, ty: Type, args: ConstructorArgs) -> Result<Box<dyn Reflect>, ReflectError> {
        let constructor = self
            .class_info(ty)?
            .constructor()
            .ok_or(ReflectError::NoConstructor(ty))?;
        constructor.invoke(args)
    }

    /// Runs every post-deserialize hook of the class chain, base first.
    ///
    /// Each hook runs once. Returns `false` if no class of the chain
    /// declares a hook.
    fn invoke_post_deserialize(&self, instance: &mut dyn Reflect) -> Result<bool, ReflectError> {
        let ty = instance.reflect_type();
        let class = self.class_info(ty)?;
        let mut ran = false;
        if let Some(superclass) = class.superclass() {
            let base = superclass.project_mut(instance).ok_or(ReflectError::WrongType {
                expected: superclass.ty(),
                actual: ty,
            })?;
            ran = self.invoke_post_deserialize(base)?;
        }
        if let Some(hook) = class.post_deserialize() {
            hook(instance);
            ran = true;
        }
        Ok(ran)
    }

    /// Returns `true` for types written as a single text leaf.
    fn is_primitive_like(&self, ty: Type) -> bool {
        matches!(self.type_info(ty), Ok(TypeInfo::Primitive(_)))
    }

    fn is_enum(&self, ty: Type) -> bool {
        matches!(self.type_info(ty), Ok(TypeInfo::Enum(_)))
    }

    fn is_array(&self, ty: Type) -> bool {
        matches!(self.type_info(ty), Ok(TypeInfo::Array(_)))
    }

    fn array_element_type(&self, ty: Type) -> Result<Type, ReflectError> {
        Ok(array_info(self, ty)?.element())
    }

    /// Materializes an array from its buffered elements.
    fn new_array(&self, ty: Type, elements: Vec<Box<dyn Reflect>>) -> Result<Box<dyn Reflect>, ReflectError> {
        array_info(self, ty)?.from_elements(elements)
    }

    fn array_length(&self, array: &dyn Reflect) -> Result<usize, ReflectError> {
        array_info(self, array.reflect_type())?.len(array)
    }

    fn array_get<'a>(&self, array: &'a dyn Reflect, index: usize) -> Result<&'a dyn Reflect, ReflectError> {
        array_info(self, array.reflect_type())?.get(array, index)
    }

    fn array_set(&self, array: &mut dyn Reflect, index: usize, value: Box<dyn Reflect>) -> Result<(), ReflectError> {
        array_info(self, array.reflect_type())?.set(array, index, value)
    }
}

fn array_info<P: ReflectionProvider + ?Sized>(provider: &P, ty: Type) -> Result<&'static ArrayInfo, ReflectError> {
    let info = provider.type_info(ty)?;
    info.as_array().ok_or(ReflectError::KindMismatch {
        ty,
        expected: TypeKind::Array,
        actual: info.kind(),
    })
}

/// Walks the superclass chain of `instance` down to `declaring`.
fn project<'a, P: ReflectionProvider + ?Sized>(
    provider: &P,
    declaring: Type,
    instance: &'a dyn Reflect,
) -> Option<&'a dyn Reflect> {
    let actual = instance.reflect_type();
    if actual == declaring {
        return Some(instance);
    }
    let base = provider.class_info(actual).ok()?.superclass()?.project(instance)?;
    project(provider, declaring, base)
}

fn project_mut<'a, P: ReflectionProvider + ?Sized>(
    provider: &P,
    declaring: Type,
    instance: &'a mut dyn Reflect,
) -> Option<&'a mut dyn Reflect> {
    let actual = instance.reflect_type();
    if actual == declaring {
        return Some(instance);
    }
    let base = provider.class_info(actual).ok()?.superclass()?.project_mut(instance)?;
    project_mut(provider, declaring, base)
}
