use alloc::collections::BTreeSet;

use crate::adapter::{AdapterKind, Collection};
use crate::impls::impl_reflect_container;
use crate::registry::GetTypeMeta;

impl_reflect_container!([T: GetTypeMeta + Ord] BTreeSet<T>, Collection(CollectionInfo), CollectionAdapter, [T]);

impl<T: GetTypeMeta + Ord> Collection for BTreeSet<T> {
    type Item = T;

    #[inline]
    fn kind() -> AdapterKind {
        AdapterKind::OrderedSet
    }

    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    #[inline]
    fn iter(&self) -> impl Iterator<Item = &T> {
        BTreeSet::iter(self)
    }

    #[inline]
    fn add(&mut self, item: T) {
        BTreeSet::insert(self, item);
    }
}

macro_rules! impl_hash_set {
    ($set:ident) => {
        impl_reflect_container!(
            [T: GetTypeMeta + Eq + Hash, S: BuildHasher + Default + Send + Sync + 'static]
            $set<T, S>,
            Collection(CollectionInfo),
            CollectionAdapter,
            [T]
        );

        impl<T, S> Collection for $set<T, S>
        where
            T: GetTypeMeta + Eq + Hash,
            S: BuildHasher + Default + Send + Sync + 'static,
        {
            type Item = T;

            #[inline]
            fn kind() -> AdapterKind {
                AdapterKind::Set
            }

            #[inline]
            fn len(&self) -> usize {
                $set::len(self)
            }

            #[inline]
            fn iter(&self) -> impl Iterator<Item = &T> {
                $set::iter(self)
            }

            #[inline]
            fn add(&mut self, item: T) {
                $set::insert(self, item);
            }
        }
    };
}

mod std_set {
    use core::hash::{BuildHasher, Hash};
    use std::collections::HashSet;

    use crate::adapter::{AdapterKind, Collection};
    use crate::impls::impl_reflect_container;
    use crate::registry::GetTypeMeta;

    impl_hash_set!(HashSet);
}

mod hashbrown_set {
    use core::hash::{BuildHasher, Hash};
    use hashbrown::HashSet;

    use crate::adapter::{AdapterKind, Collection};
    use crate::impls::impl_reflect_container;
    use crate::registry::GetTypeMeta;

    impl_hash_set!(HashSet);
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeSet;
    use alloc::string::String;

    use crate::adapter::AdapterKind;
    use crate::hash::HashSet;
    use crate::info::Typed;

    #[test]
    fn set_kinds() {
        let ordered = BTreeSet::<String>::type_info().as_collection().unwrap();
        assert_eq!(ordered.kind(), AdapterKind::OrderedSet);
        assert!(ordered.kind().is_ordered());

        let hashed = HashSet::<i32>::type_info().as_collection().unwrap();
        assert_eq!(hashed.kind(), AdapterKind::Set);
        assert!(!hashed.kind().is_ordered());

        let std_hashed = std::collections::HashSet::<i32>::type_info();
        assert_ne!(std_hashed.ty(), hashed.ty());
    }
}
