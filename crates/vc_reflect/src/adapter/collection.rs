use alloc::boxed::Box;
use core::fmt;

use crate::adapter::AdapterKind;
use crate::info::{Type, Typed};
use crate::registry::{FromType, GetTypeMeta, TypeTrait};
use crate::{AccessError, Reflect, ReflectError};

// -----------------------------------------------------------------------------
// Collection

/// A sequence or set container the serializer can walk and rebuild.
///
/// Implementations must call the container's inherent methods by path
/// (`Vec::push(self, item)`), method syntax would resolve back to this trait.
pub trait Collection: Typed + Default {
    type Item: GetTypeMeta;

    fn kind() -> AdapterKind;

    fn len(&self) -> usize;

    /// Iterates in the container's own order.
    fn iter(&self) -> impl Iterator<Item = &Self::Item>;

    fn get(&self, index: usize) -> Option<&Self::Item> {
        Collection::iter(self).nth(index)
    }

    /// Appends an element; sets drop duplicates.
    fn add(&mut self, item: Self::Item);
}

// -----------------------------------------------------------------------------
// CollectionAdapter

type IterFn = for<'a> fn(&'a dyn Reflect) -> Option<Box<dyn Iterator<Item = &'a dyn Reflect> + 'a>>;
type GetFn = for<'a> fn(&'a dyn Reflect, usize) -> Option<&'a dyn Reflect>;
type AddFn = fn(&mut dyn Reflect, Box<dyn Reflect>) -> Result<(), AccessError>;

/// The `length` / `get` / `add` view of a sequence or set.
///
/// Stored as a [`TypeTrait`] of the container type. Every method checks
/// that the container handed in is of the adapted type.
///
/// # Examples
///
/// ```
/// use vc_reflect::Reflect;
/// use vc_reflect::registry::TypeRegistry;
/// use vc_reflect::info::Type;
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Vec<String>>();
///
/// let adapter = registry.adapter_for(Type::of::<Vec<String>>()).unwrap();
/// let mut list = adapter.new_instance();
/// adapter.add(list.as_mut(), String::from("a").into_boxed_reflect()).unwrap();
///
/// assert_eq!(adapter.len(list.as_ref()).unwrap(), 1);
/// assert_eq!(adapter.get(list.as_ref(), 0).unwrap().downcast_ref::<String>().unwrap(), "a");
/// ```
#[derive(Clone)]
pub struct CollectionAdapter {
    container: Type,
    kind: AdapterKind,
    element: Option<Type>,
    new: fn() -> Box<dyn Reflect>,
    len: fn(&dyn Reflect) -> Option<usize>,
    get: GetFn,
    iter: IterFn,
    add: AddFn,
}

impl CollectionAdapter {
    /// Builds an adapter from raw parts.
    ///
    /// Used for containers whose element type is only known at runtime,
    /// in which case `element` is `None`.
    #[allow(clippy::too_many_arguments, reason = "one function per operation")]
    pub fn from_parts(
        container: Type,
        kind: AdapterKind,
        element: Option<Type>,
        new: fn() -> Box<dyn Reflect>,
        len: fn(&dyn Reflect) -> Option<usize>,
        get: GetFn,
        iter: IterFn,
        add: AddFn,
    ) -> Self {
        Self {
            container,
            kind,
            element,
            new,
            len,
            get,
            iter,
            add,
        }
    }

    #[inline(always)]
    pub const fn container(&self) -> Type {
        self.container
    }

    #[inline(always)]
    pub const fn kind(&self) -> AdapterKind {
        self.kind
    }

    /// The element type, `None` for type-erased containers.
    #[inline(always)]
    pub const fn element(&self) -> Option<Type> {
        self.element
    }

    /// Creates an empty container.
    #[inline]
    pub fn new_instance(&self) -> Box<dyn Reflect> {
        (self.new)()
    }

    fn wrong_type(&self, container: &dyn Reflect) -> ReflectError {
        ReflectError::WrongType {
            expected: self.container,
            actual: container.reflect_type(),
        }
    }

    pub fn len(&self, container: &dyn Reflect) -> Result<usize, ReflectError> {
        (self.len)(container).ok_or_else(|| self.wrong_type(container))
    }

    pub fn get<'a>(&self, container: &'a dyn Reflect, index: usize) -> Result<&'a dyn Reflect, ReflectError> {
        let len = self.len(container)?;
        match (self.get)(container, index) {
            Some(element) => Ok(element),
            None => Err(ReflectError::IndexOutOfBounds {
                ty: self.container,
                index,
                len,
            }),
        }
    }

    pub fn iter<'a>(
        &self,
        container: &'a dyn Reflect,
    ) -> Result<Box<dyn Iterator<Item = &'a dyn Reflect> + 'a>, ReflectError> {
        (self.iter)(container).ok_or_else(|| self.wrong_type(container))
    }

    pub fn add(&self, container: &mut dyn Reflect, element: Box<dyn Reflect>) -> Result<(), ReflectError> {
        let actual = element.reflect_type();
        let container_ty = container.reflect_type();
        (self.add)(container, element).map_err(|err| match err {
            AccessError::Instance => ReflectError::WrongType {
                expected: self.container,
                actual: container_ty,
            },
            AccessError::Null | AccessError::Value(_) => ReflectError::ElementMismatch {
                container: self.container,
                actual,
            },
        })
    }
}

impl fmt::Debug for CollectionAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionAdapter")
            .field("container", &self.container)
            .field("kind", &self.kind)
            .field("element", &self.element)
            .finish_non_exhaustive()
    }
}

impl<C: Collection> FromType<C> for CollectionAdapter {
    fn from_type() -> Self {
        Self {
            container: Type::of::<C>(),
            kind: C::kind(),
            element: Some(Type::of::<C::Item>()),
            new: new_collection::<C>,
            len: collection_len::<C>,
            get: collection_get::<C>,
            iter: collection_iter::<C>,
            add: collection_add::<C>,
        }
    }
}

impl TypeTrait for CollectionAdapter {}

fn new_collection<C: Collection>() -> Box<dyn Reflect> {
    Box::new(C::default())
}

fn collection_len<C: Collection>(container: &dyn Reflect) -> Option<usize> {
    container.downcast_ref::<C>().map(C::len)
}

fn collection_get<C: Collection>(container: &dyn Reflect, index: usize) -> Option<&dyn Reflect> {
    let container = container.downcast_ref::<C>()?;
    Collection::get(container, index).map(|element| element as &dyn Reflect)
}

fn collection_iter<'a, C: Collection>(
    container: &'a dyn Reflect,
) -> Option<Box<dyn Iterator<Item = &'a dyn Reflect> + 'a>> {
    let container = container.downcast_ref::<C>()?;
    let iter = Collection::iter(container).map(|element| element as &dyn Reflect);
    Some(Box::new(iter))
}

fn collection_add<C: Collection>(container: &mut dyn Reflect, element: Box<dyn Reflect>) -> Result<(), AccessError> {
    let container = container.downcast_mut::<C>().ok_or(AccessError::Instance)?;
    let element = element
        .take::<C::Item>()
        .map_err(|element| AccessError::Value(element.reflect_type()))?;
    Collection::add(container, element);
    Ok(())
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeSet;
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::CollectionAdapter;
    use crate::registry::FromType;
    use crate::{Reflect, ReflectError};

    #[test]
    fn add_then_read_back_in_order() {
        let adapter = <CollectionAdapter as FromType<Vec<i32>>>::from_type();
        let mut list = adapter.new_instance();
        for value in [3_i32, 1, 2] {
            adapter.add(list.as_mut(), Box::new(value)).unwrap();
        }

        let values: Vec<i32> = adapter
            .iter(list.as_ref())
            .unwrap()
            .map(|v| *v.downcast_ref::<i32>().unwrap())
            .collect();
        assert_eq!(values, [3, 1, 2]);
        assert_eq!(adapter.get(list.as_ref(), 2).unwrap().downcast_ref::<i32>(), Some(&2));
    }

    #[test]
    fn sets_drop_duplicates() {
        let adapter = <CollectionAdapter as FromType<BTreeSet<String>>>::from_type();
        let mut set = adapter.new_instance();
        adapter.add(set.as_mut(), String::from("x").into_boxed_reflect()).unwrap();
        adapter.add(set.as_mut(), String::from("x").into_boxed_reflect()).unwrap();
        assert_eq!(adapter.len(set.as_ref()).unwrap(), 1);
    }

    #[test]
    fn rejects_foreign_values() {
        let adapter = <CollectionAdapter as FromType<Vec<i32>>>::from_type();
        let mut list = adapter.new_instance();

        let err = adapter.add(list.as_mut(), Box::new(1_u8)).unwrap_err();
        assert!(matches!(err, ReflectError::ElementMismatch { .. }));

        let err = adapter.get(list.as_ref(), 0).unwrap_err();
        assert!(matches!(err, ReflectError::IndexOutOfBounds { index: 0, len: 0, .. }));

        let other = 5_i32;
        let err = adapter.len(&other).unwrap_err();
        assert!(matches!(err, ReflectError::WrongType { .. }));
    }
}
