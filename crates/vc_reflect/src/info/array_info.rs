use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::info::{Type, Typed};
use crate::registry::GetTypeMeta;
use crate::{Reflect, ReflectError};

// -----------------------------------------------------------------------------
// Array

/// A contiguous sequence with a length fixed at construction.
///
/// Implemented for `[T; N]` and `Box<[T]>`.
pub trait Array: Typed + Sized {
    type Item: GetTypeMeta;

    /// `Some(N)` when the length is part of the type.
    const CAPACITY: Option<usize>;

    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Builds the array from its elements, `None` if the count does not fit.
    fn from_vec(items: Vec<Self::Item>) -> Option<Self>;
}

// -----------------------------------------------------------------------------
// ArrayInfo

type ArrayGetFn = for<'a> fn(&'a dyn Reflect, usize) -> Result<&'a dyn Reflect, ReflectError>;
type ArraySetFn = fn(&mut dyn Reflect, usize, Box<dyn Reflect>) -> Result<(), ReflectError>;
type ArrayNewFn = fn(Vec<Box<dyn Reflect>>) -> Result<Box<dyn Reflect>, ReflectError>;

/// Type info of an [`Array`], with element access independent of the element type.
#[derive(Clone)]
pub struct ArrayInfo {
    ty: Type,
    element: Type,
    capacity: Option<usize>,
    len: fn(&dyn Reflect) -> Result<usize, ReflectError>,
    get: ArrayGetFn,
    set: ArraySetFn,
    from_elements: ArrayNewFn,
}

impl ArrayInfo {
    pub fn new<A: Array>() -> Self {
        Self {
            ty: Type::of::<A>(),
            element: Type::of::<A::Item>(),
            capacity: A::CAPACITY,
            len: array_len::<A>,
            get: array_get::<A>,
            set: array_set::<A>,
            from_elements: array_from_elements::<A>,
        }
    }

    #[inline(always)]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    /// The component type.
    #[inline(always)]
    pub const fn element(&self) -> Type {
        self.element
    }

    #[inline(always)]
    pub const fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    #[inline]
    pub fn len(&self, array: &dyn Reflect) -> Result<usize, ReflectError> {
        (self.len)(array)
    }

    #[inline]
    pub fn get<'a>(&self, array: &'a dyn Reflect, index: usize) -> Result<&'a dyn Reflect, ReflectError> {
        (self.get)(array, index)
    }

    #[inline]
    pub fn set(
        &self,
        array: &mut dyn Reflect,
        index: usize,
        value: Box<dyn Reflect>,
    ) -> Result<(), ReflectError> {
        (self.set)(array, index, value)
    }

    /// Materializes an array holding `elements` in order.
    #[inline]
    pub fn from_elements(&self, elements: Vec<Box<dyn Reflect>>) -> Result<Box<dyn Reflect>, ReflectError> {
        (self.from_elements)(elements)
    }
}

impl fmt::Debug for ArrayInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayInfo")
            .field("ty", &self.ty)
            .field("element", &self.element)
            .field("capacity", &self.capacity)
            .finish()
    }
}

fn downcast_array<A: Array>(array: &dyn Reflect) -> Result<&A, ReflectError> {
    array.downcast_ref::<A>().ok_or(ReflectError::WrongType {
        expected: Type::of::<A>(),
        actual: array.reflect_type(),
    })
}

fn array_len<A: Array>(array: &dyn Reflect) -> Result<usize, ReflectError> {
    downcast_array::<A>(array).map(A::len)
}

fn array_get<A: Array>(array: &dyn Reflect, index: usize) -> Result<&dyn Reflect, ReflectError> {
    let array = downcast_array::<A>(array)?;
    match array.get(index) {
        Some(element) => Ok(element as &dyn Reflect),
        None => Err(ReflectError::IndexOutOfBounds {
            ty: Type::of::<A>(),
            index,
            len: array.len(),
        }),
    }
}

fn array_set<A: Array>(
    array: &mut dyn Reflect,
    index: usize,
    value: Box<dyn Reflect>,
) -> Result<(), ReflectError> {
    let actual = array.reflect_type();
    let Some(array) = array.downcast_mut::<A>() else {
        return Err(ReflectError::WrongType {
            expected: Type::of::<A>(),
            actual,
        });
    };
    let len = array.len();
    let Some(slot) = array.get_mut(index) else {
        return Err(ReflectError::IndexOutOfBounds {
            ty: Type::of::<A>(),
            index,
            len,
        });
    };
    *slot = value
        .take::<A::Item>()
        .map_err(|value| ReflectError::ElementMismatch {
            container: Type::of::<A>(),
            actual: value.reflect_type(),
        })?;
    Ok(())
}

fn array_from_elements<A: Array>(elements: Vec<Box<dyn Reflect>>) -> Result<Box<dyn Reflect>, ReflectError> {
    let len = elements.len();
    let mut items = Vec::with_capacity(len);
    for element in elements {
        let item = element
            .take::<A::Item>()
            .map_err(|value| ReflectError::ElementMismatch {
                container: Type::of::<A>(),
                actual: value.reflect_type(),
            })?;
        items.push(item);
    }
    match A::from_vec(items) {
        Some(array) => Ok(array.into_boxed_reflect()),
        None => Err(ReflectError::ArrayLength {
            ty: Type::of::<A>(),
            expected: A::CAPACITY.unwrap_or(len),
            actual: len,
        }),
    }
}
