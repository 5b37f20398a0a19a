use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{Array, ArrayInfo, TypeInfo, Typed};
use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};

impl<T: GetTypeMeta, const N: usize> Reflect for [T; N] {
    crate::reflection::impl_reflect_cast_fn!();
}

impl<T: GetTypeMeta, const N: usize> Typed for [T; N] {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Array(ArrayInfo::new::<Self>()))
    }
}

impl<T: GetTypeMeta, const N: usize> Array for [T; N] {
    type Item = T;

    const CAPACITY: Option<usize> = Some(N);

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }

    #[inline]
    fn from_vec(items: Vec<T>) -> Option<Self> {
        <[T; N]>::try_from(items).ok()
    }
}

impl<T: GetTypeMeta, const N: usize> GetTypeMeta for [T; N] {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

impl<T: GetTypeMeta> Reflect for Box<[T]> {
    crate::reflection::impl_reflect_cast_fn!();
}

impl<T: GetTypeMeta> Typed for Box<[T]> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Array(ArrayInfo::new::<Self>()))
    }
}

impl<T: GetTypeMeta> Array for Box<[T]> {
    type Item = T;

    const CAPACITY: Option<usize> = None;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }

    #[inline]
    fn from_vec(items: Vec<T>) -> Option<Self> {
        Some(items.into_boxed_slice())
    }
}

impl<T: GetTypeMeta> GetTypeMeta for Box<[T]> {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;

    use crate::info::{Type, Typed};
    use crate::{Reflect, ReflectError};

    #[test]
    fn fixed_array_access() {
        let info = <[i32; 3]>::type_info().as_array().unwrap();
        assert_eq!(info.capacity(), Some(3));
        assert_eq!(info.element(), Type::of::<i32>());

        let mut value = [1_i32, 2, 3];
        assert_eq!(info.len(&value).unwrap(), 3);
        info.set(&mut value, 1, Box::new(20_i32)).unwrap();
        assert_eq!(value, [1, 20, 3]);

        let err = info.get(&value, 3).unwrap_err();
        assert!(matches!(err, ReflectError::IndexOutOfBounds { index: 3, len: 3, .. }));
    }

    #[test]
    fn build_from_elements() {
        let info = <[u8; 2]>::type_info().as_array().unwrap();
        let err = info.from_elements(vec![Box::new(1_u8) as Box<dyn Reflect>]).unwrap_err();
        assert!(matches!(err, ReflectError::ArrayLength { expected: 2, actual: 1, .. }));

        let info = <Box<[String]>>::type_info().as_array().unwrap();
        let value = info
            .from_elements(vec![String::from("a").into_boxed_reflect(), String::from("b").into_boxed_reflect()])
            .unwrap()
            .take::<Box<[String]>>()
            .unwrap();
        assert_eq!(&*value, ["a", "b"]);
    }
}
