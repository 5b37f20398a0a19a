use alloc::collections::BTreeMap;

use crate::adapter::{AdapterKind, MapCollection};
use crate::impls::impl_reflect_container;
use crate::registry::GetTypeMeta;

impl_reflect_container!(
    [K: GetTypeMeta + Ord, V: GetTypeMeta]
    BTreeMap<K, V>,
    Map(MapInfo),
    MapAdapter,
    [K, V]
);

impl<K: GetTypeMeta + Ord, V: GetTypeMeta> MapCollection for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    #[inline]
    fn kind() -> AdapterKind {
        AdapterKind::OrderedMap
    }

    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    #[inline]
    fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        BTreeMap::iter(self)
    }

    #[inline]
    fn insert(&mut self, key: K, value: V) {
        BTreeMap::insert(self, key, value);
    }
}

macro_rules! impl_hash_map {
    ($map:ident) => {
        impl_reflect_container!(
            [K: GetTypeMeta + Eq + Hash, V: GetTypeMeta, S: BuildHasher + Default + Send + Sync + 'static]
            $map<K, V, S>,
            Map(MapInfo),
            MapAdapter,
            [K, V]
        );

        impl<K, V, S> MapCollection for $map<K, V, S>
        where
            K: GetTypeMeta + Eq + Hash,
            V: GetTypeMeta,
            S: BuildHasher + Default + Send + Sync + 'static,
        {
            type Key = K;
            type Value = V;

            #[inline]
            fn kind() -> AdapterKind {
                AdapterKind::Map
            }

            #[inline]
            fn len(&self) -> usize {
                $map::len(self)
            }

            #[inline]
            fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
                $map::iter(self)
            }

            #[inline]
            fn insert(&mut self, key: K, value: V) {
                $map::insert(self, key, value);
            }
        }
    };
}

mod std_map {
    use core::hash::{BuildHasher, Hash};
    use std::collections::HashMap;

    use crate::adapter::{AdapterKind, MapCollection};
    use crate::impls::impl_reflect_container;
    use crate::registry::GetTypeMeta;

    impl_hash_map!(HashMap);
}

mod hashbrown_map {
    use core::hash::{BuildHasher, Hash};
    use hashbrown::HashMap;

    use crate::adapter::{AdapterKind, MapCollection};
    use crate::impls::impl_reflect_container;
    use crate::registry::GetTypeMeta;

    impl_hash_map!(HashMap);
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::adapter::AdapterKind;
    use crate::hash::HashMap;
    use crate::info::{Type, Typed};

    #[test]
    fn map_infos() {
        let info = BTreeMap::<String, Vec<u8>>::type_info().as_map().unwrap();
        assert_eq!(info.kind(), AdapterKind::OrderedMap);
        assert_eq!(info.key(), Some(Type::of::<String>()));
        assert_eq!(info.value(), Some(Type::of::<Vec<u8>>()));

        let info = HashMap::<u32, bool>::type_info().as_map().unwrap();
        assert_eq!(info.kind(), AdapterKind::Map);
        assert!(info.kind().is_map());
    }
}
