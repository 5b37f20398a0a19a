use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::adapter::{AdapterKind, CollectionAdapter, MapAdapter};
use crate::impls::TypeInfoCell;
use crate::info::{CollectionInfo, MapInfo, Type, TypeInfo, Typed};
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTraitDefault};
use crate::{AccessError, Reflect};

// -----------------------------------------------------------------------------
// DynamicList

/// A list of values whose element type is not part of its type.
///
/// Writing a `DynamicList` needs nothing beyond the registry: each element
/// is written with its own runtime type. Reading one back needs the element
/// type, which only AOT metadata can supply.
///
/// # Examples
///
/// ```
/// use vc_reflect::Reflect;
/// use vc_reflect::impls::DynamicList;
///
/// let mut list = DynamicList::new();
/// list.push(1_u8.into_boxed_reflect());
/// list.push(String::from("x").into_boxed_reflect());
///
/// assert_eq!(list.len(), 2);
/// assert!(list.get(1).unwrap().is::<String>());
/// ```
#[derive(Debug, Default)]
pub struct DynamicList {
    values: Vec<Box<dyn Reflect>>,
}

impl DynamicList {
    #[inline]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, value: Box<dyn Reflect>) {
        self.values.push(value);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.values.get(index).map(|value| &**value as &dyn Reflect)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Reflect> {
        self.values.iter().map(|value| &**value as &dyn Reflect)
    }

    /// Consumes the list, returning the boxed values.
    #[inline]
    pub fn into_values(self) -> Vec<Box<dyn Reflect>> {
        self.values
    }
}

impl FromIterator<Box<dyn Reflect>> for DynamicList {
    fn from_iter<I: IntoIterator<Item = Box<dyn Reflect>>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Reflect for DynamicList {
    crate::reflection::impl_reflect_cast_fn!();
}

impl Typed for DynamicList {
    fn type_info() -> &'static TypeInfo {
        static CELL: TypeInfoCell = TypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Collection(CollectionInfo::erased::<Self>(AdapterKind::List)))
    }
}

impl GetTypeMeta for DynamicList {
    fn get_type_meta() -> TypeMeta {
        let adapter = CollectionAdapter::from_parts(
            Type::of::<Self>(),
            AdapterKind::List,
            None,
            new_list,
            list_len,
            list_get,
            list_iter,
            list_add,
        );
        TypeMeta::of::<Self>()
            .with_trait(adapter)
            .with_trait(<TypeTraitDefault as FromType<Self>>::from_type())
    }
}

fn new_list() -> Box<dyn Reflect> {
    Box::new(DynamicList::new())
}

fn list_len(list: &dyn Reflect) -> Option<usize> {
    list.downcast_ref::<DynamicList>().map(DynamicList::len)
}

fn list_get(list: &dyn Reflect, index: usize) -> Option<&dyn Reflect> {
    list.downcast_ref::<DynamicList>()?.get(index)
}

fn list_iter<'a>(list: &'a dyn Reflect) -> Option<Box<dyn Iterator<Item = &'a dyn Reflect> + 'a>> {
    let list = list.downcast_ref::<DynamicList>()?;
    Some(Box::new(list.iter()))
}

fn list_add(list: &mut dyn Reflect, value: Box<dyn Reflect>) -> Result<(), AccessError> {
    let list = list.downcast_mut::<DynamicList>().ok_or(AccessError::Instance)?;
    list.push(value);
    Ok(())
}

// -----------------------------------------------------------------------------
// DynamicMap

/// An insertion-ordered map of untyped keys and values.
///
/// Keys are not compared, so inserting an existing key adds a second entry.
#[derive(Debug, Default)]
pub struct DynamicMap {
    entries: Vec<(Box<dyn Reflect>, Box<dyn Reflect>)>,
}

impl DynamicMap {
    #[inline]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    #[inline]
    pub fn insert(&mut self, key: Box<dyn Reflect>, value: Box<dyn Reflect>) {
        self.entries.push((key, value));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&dyn Reflect, &dyn Reflect)> {
        self.entries
            .iter()
            .map(|(k, v)| (&**k as &dyn Reflect, &**v as &dyn Reflect))
    }
}

impl Reflect for DynamicMap {
    crate::reflection::impl_reflect_cast_fn!();
}

impl Typed for DynamicMap {
    fn type_info() -> &'static TypeInfo {
        static CELL: TypeInfoCell = TypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Map(MapInfo::erased::<Self>(AdapterKind::OrderedMap)))
    }
}

impl GetTypeMeta for DynamicMap {
    fn get_type_meta() -> TypeMeta {
        let adapter = MapAdapter::from_parts(
            Type::of::<Self>(),
            AdapterKind::OrderedMap,
            None,
            None,
            new_map,
            map_len,
            map_entries,
            map_insert,
        );
        TypeMeta::of::<Self>()
            .with_trait(adapter)
            .with_trait(<TypeTraitDefault as FromType<Self>>::from_type())
    }
}

fn new_map() -> Box<dyn Reflect> {
    Box::new(DynamicMap::new())
}

fn map_len(map: &dyn Reflect) -> Option<usize> {
    map.downcast_ref::<DynamicMap>().map(DynamicMap::len)
}

fn map_entries<'a>(
    map: &'a dyn Reflect,
) -> Option<Box<dyn Iterator<Item = (&'a dyn Reflect, &'a dyn Reflect)> + 'a>> {
    let map = map.downcast_ref::<DynamicMap>()?;
    Some(Box::new(map.iter()))
}

fn map_insert(map: &mut dyn Reflect, key: Box<dyn Reflect>, value: Box<dyn Reflect>) -> Result<(), AccessError> {
    let map = map.downcast_mut::<DynamicMap>().ok_or(AccessError::Instance)?;
    map.insert(key, value);
    Ok(())
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::{DynamicList, DynamicMap};
    use crate::Reflect;
    use crate::info::Type;
    use crate::registry::TypeRegistry;

    #[test]
    fn erased_adapters() {
        let mut registry = TypeRegistry::new();
        registry.register::<DynamicList>();
        registry.register::<DynamicMap>();

        let adapter = registry.adapter_for(Type::of::<DynamicList>()).unwrap();
        assert_eq!(adapter.element(), None);
        let mut list = adapter.new_instance();
        adapter.add(list.as_mut(), 1_i64.into_boxed_reflect()).unwrap();
        adapter.add(list.as_mut(), String::from("s").into_boxed_reflect()).unwrap();
        assert_eq!(adapter.len(list.as_ref()).unwrap(), 2);

        let adapter = registry.map_adapter_for(Type::of::<DynamicMap>()).unwrap();
        let mut map = adapter.new_instance();
        adapter
            .insert(map.as_mut(), 'k'.into_boxed_reflect(), true.into_boxed_reflect())
            .unwrap();
        let (key, value) = adapter.entries(map.as_ref()).unwrap().next().unwrap();
        assert_eq!(key.downcast_ref::<char>(), Some(&'k'));
        assert_eq!(value.downcast_ref::<bool>(), Some(&true));
    }
}
