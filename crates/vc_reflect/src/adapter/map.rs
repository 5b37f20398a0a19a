use alloc::boxed::Box;
use core::fmt;

use crate::adapter::AdapterKind;
use crate::info::{Type, Typed};
use crate::registry::{FromType, GetTypeMeta, TypeTrait};
use crate::{AccessError, Reflect, ReflectError};

// -----------------------------------------------------------------------------
// MapCollection

/// A key-value container the serializer can walk and rebuild.
///
/// As with [`Collection`](crate::adapter::Collection), implementations
/// call inherent methods by path.
pub trait MapCollection: Typed + Default {
    type Key: GetTypeMeta;
    type Value: GetTypeMeta;

    fn kind() -> AdapterKind;

    fn len(&self) -> usize;

    fn iter(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;

    /// Inserts a mapping; a later key replaces an earlier one.
    fn insert(&mut self, key: Self::Key, value: Self::Value);
}

// -----------------------------------------------------------------------------
// MapAdapter

type EntriesFn = for<'a> fn(
    &'a dyn Reflect,
) -> Option<Box<dyn Iterator<Item = (&'a dyn Reflect, &'a dyn Reflect)> + 'a>>;
type InsertFn = fn(&mut dyn Reflect, Box<dyn Reflect>, Box<dyn Reflect>) -> Result<(), AccessError>;

/// The entry view of a key-value container.
///
/// Each mapping is written as one `entry` node holding a `key` and a
/// `value` child.
#[derive(Clone)]
pub struct MapAdapter {
    container: Type,
    kind: AdapterKind,
    key: Option<Type>,
    value: Option<Type>,
    new: fn() -> Box<dyn Reflect>,
    len: fn(&dyn Reflect) -> Option<usize>,
    entries: EntriesFn,
    insert: InsertFn,
}

impl MapAdapter {
    /// Builds an adapter from raw parts, see [`CollectionAdapter::from_parts`].
    ///
    /// [`CollectionAdapter::from_parts`]: crate::adapter::CollectionAdapter::from_parts
    #[allow(clippy::too_many_arguments, reason = "one function per operation")]
    pub fn from_parts(
        container: Type,
        kind: AdapterKind,
        key: Option<Type>,
        value: Option<Type>,
        new: fn() -> Box<dyn Reflect>,
        len: fn(&dyn Reflect) -> Option<usize>,
        entries: EntriesFn,
        insert: InsertFn,
    ) -> Self {
        Self {
            container,
            kind,
            key,
            value,
            new,
            len,
            entries,
            insert,
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

    #[inline(always)]
    pub const fn key(&self) -> Option<Type> {
        self.key
    }

    #[inline(always)]
    pub const fn value(&self) -> Option<Type> {
        self.value
    }

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

    /// Iterates the mappings in the container's own order.
    pub fn entries<'a>(
        &self,
        container: &'a dyn Reflect,
    ) -> Result<Box<dyn Iterator<Item = (&'a dyn Reflect, &'a dyn Reflect)> + 'a>, ReflectError> {
        (self.entries)(container).ok_or_else(|| self.wrong_type(container))
    }

    pub fn insert(
        &self,
        container: &mut dyn Reflect,
        key: Box<dyn Reflect>,
        value: Box<dyn Reflect>,
    ) -> Result<(), ReflectError> {
        let container_ty = container.reflect_type();
        (self.insert)(container, key, value).map_err(|err| match err {
            AccessError::Value(actual) => ReflectError::ElementMismatch {
                container: self.container,
                actual,
            },
            _ => ReflectError::WrongType {
                expected: self.container,
                actual: container_ty,
            },
        })
    }
}

impl fmt::Debug for MapAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapAdapter")
            .field("container", &self.container)
            .field("kind", &self.kind)
            .field("key", &self.key)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl<M: MapCollection> FromType<M> for MapAdapter {
    fn from_type() -> Self {
        Self {
            container: Type::of::<M>(),
            kind: M::kind(),
            key: Some(Type::of::<M::Key>()),
            value: Some(Type::of::<M::Value>()),
            new: new_map::<M>,
            len: map_len::<M>,
            entries: map_entries::<M>,
            insert: map_insert::<M>,
        }
    }
}

impl TypeTrait for MapAdapter {}

fn new_map<M: MapCollection>() -> Box<dyn Reflect> {
    Box::new(M::default())
}

fn map_len<M: MapCollection>(container: &dyn Reflect) -> Option<usize> {
    container.downcast_ref::<M>().map(M::len)
}

fn map_entries<'a, M: MapCollection>(
    container: &'a dyn Reflect,
) -> Option<Box<dyn Iterator<Item = (&'a dyn Reflect, &'a dyn Reflect)> + 'a>> {
    let container = container.downcast_ref::<M>()?;
    let iter = MapCollection::iter(container).map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect));
    Some(Box::new(iter))
}

fn map_insert<M: MapCollection>(
    container: &mut dyn Reflect,
    key: Box<dyn Reflect>,
    value: Box<dyn Reflect>,
) -> Result<(), AccessError> {
    let container = container.downcast_mut::<M>().ok_or(AccessError::Instance)?;
    let key = key
        .take::<M::Key>()
        .map_err(|key| AccessError::Value(key.reflect_type()))?;
    let value = value
        .take::<M::Value>()
        .map_err(|value| AccessError::Value(value.reflect_type()))?;
    MapCollection::insert(container, key, value);
    Ok(())
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::MapAdapter;
    use crate::registry::FromType;
    use crate::{Reflect, ReflectError};

    #[test]
    fn ordered_map_entries() {
        let adapter = <MapAdapter as FromType<BTreeMap<String, i32>>>::from_type();
        let mut map = adapter.new_instance();
        adapter
            .insert(map.as_mut(), String::from("b").into_boxed_reflect(), Box::new(2_i32))
            .unwrap();
        adapter
            .insert(map.as_mut(), String::from("a").into_boxed_reflect(), Box::new(1_i32))
            .unwrap();

        let keys: Vec<&str> = adapter
            .entries(map.as_ref())
            .unwrap()
            .map(|(k, _)| k.downcast_ref::<String>().unwrap().as_str())
            .collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn rejects_mismatched_value() {
        let adapter = <MapAdapter as FromType<BTreeMap<String, i32>>>::from_type();
        let mut map = adapter.new_instance();
        let err = adapter
            .insert(map.as_mut(), String::from("k").into_boxed_reflect(), Box::new(1_u64))
            .unwrap_err();
        assert!(matches!(err, ReflectError::ElementMismatch { .. }));
        assert_eq!(adapter.len(map.as_ref()).unwrap(), 0);
    }
}
