use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::adapter::{AdapterKind, Collection};
use crate::impls::impl_reflect_container;
use crate::registry::GetTypeMeta;

impl_reflect_container!([T: GetTypeMeta] Vec<T>, Collection(CollectionInfo), CollectionAdapter, [T]);

impl<T: GetTypeMeta> Collection for Vec<T> {
    type Item = T;

    #[inline]
    fn kind() -> AdapterKind {
        AdapterKind::sequence_of::<T>()
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn iter(&self) -> impl Iterator<Item = &T> {
        <[T]>::iter(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    #[inline]
    fn add(&mut self, item: T) {
        Vec::push(self, item);
    }
}

impl_reflect_container!([T: GetTypeMeta] VecDeque<T>, Collection(CollectionInfo), CollectionAdapter, [T]);

impl<T: GetTypeMeta> Collection for VecDeque<T> {
    type Item = T;

    #[inline]
    fn kind() -> AdapterKind {
        AdapterKind::List
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn iter(&self) -> impl Iterator<Item = &T> {
        VecDeque::iter(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline]
    fn add(&mut self, item: T) {
        VecDeque::push_back(self, item);
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::adapter::AdapterKind;
    use crate::info::{PrimitiveKind, Type, TypeInfo, Typed};

    #[test]
    fn generic_infos_are_distinct() {
        let a = Vec::<u8>::type_info();
        let b = Vec::<String>::type_info();
        assert_eq!(a.ty(), Type::of::<Vec<u8>>());
        assert_eq!(b.ty(), Type::of::<Vec<String>>());

        let TypeInfo::Collection(info) = a else {
            panic!("Vec should be a collection");
        };
        assert_eq!(info.kind(), AdapterKind::PrimitiveArray(PrimitiveKind::U8));
        assert_eq!(info.element(), Some(Type::of::<u8>()));
    }

    #[test]
    fn deque_is_a_list() {
        let info = VecDeque::<f64>::type_info().as_collection().unwrap();
        assert_eq!(info.kind(), AdapterKind::List);
    }
}
