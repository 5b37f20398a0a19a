use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::Type;

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait of the reflection layer.
///
/// A `Reflect` value can be inspected through its [`TypeInfo`] and moved
/// around as `dyn Reflect` without knowing the concrete type at compile time.
/// Everything the serializer touches (field values, collection elements, map
/// keys) is handed over as `&dyn Reflect` or `Box<dyn Reflect>`.
///
/// It's strongly recommended to use [the derive macro] rather than
/// implementing this trait by hand.
///
/// # Type Identification
///
/// [`Any::type_id`] on `Box<dyn Reflect>` returns the container's type ID,
/// not the inner value's. Use [`Reflect::ty_id`] instead:
///
/// ```rust
/// # use vc_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());
/// assert!(x.ty_id() == TypeId::of::<i32>());
/// ```
///
/// # Interface Values
///
/// A value declared through an interface (`Box<dyn Shape>`) is reflectable
/// itself, so it can sit in a field or a container. [`Reflect::resolve`]
/// steps through such an indirection and yields the concrete object; for
/// every other type it returns `self`.
///
/// [`TypeInfo`]: crate::info::TypeInfo
/// [the derive macro]: crate::derive::Reflect
pub trait Reflect: Send + Sync + Any {
    /// Casts this type to a reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed reflected value.
    #[inline(always)]
    fn into_reflect(self: Box<Self>) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        self
    }

    /// Boxes this value as a reflected value.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the value itself.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the [`Type`] handle of the value itself.
    ///
    /// For an interface box this is the box type, see [`Reflect::resolve`].
    #[inline]
    fn reflect_type(&self) -> Type {
        Type::of::<Self>()
    }

    /// Returns the concrete object behind this value.
    fn resolve(&self) -> &dyn Reflect;

    /// Returns the concrete object behind this value, mutably.
    fn resolve_mut(&mut self) -> &mut dyn Reflect;
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// assert!(x.is::<i32>());
    /// ```
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the boxed value to type `T`, handing the box back on mismatch.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let x: Box<dyn Reflect> = String::from("abc").into_boxed_reflect();
    ///
    /// let x = x.take::<i32>().unwrap_err();
    /// assert_eq!(x.take::<String>().unwrap(), "abc");
    /// ```
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        match <Box<dyn Any>>::downcast::<T>(self) {
            Ok(value) => Ok(*value),
            Err(_) => unreachable!("type is already checked"),
        }
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dyn Reflect({})", self.resolve().reflect_type())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements the `resolve` pair for a concrete type.
macro_rules! impl_reflect_cast_fn {
    () => {
        #[inline(always)]
        fn resolve(&self) -> &dyn $crate::Reflect {
            self
        }

        #[inline(always)]
        fn resolve_mut(&mut self) -> &mut dyn $crate::Reflect {
            self
        }
    };
}

pub(crate) use impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::Reflect;

    #[test]
    fn take_returns_the_box_on_mismatch() {
        let value: Box<dyn Reflect> = String::from("v").into_boxed_reflect();
        let value = value.take::<u8>().unwrap_err();
        assert!(value.is::<String>());
        assert_eq!(value.take::<String>().unwrap(), "v");
    }

    #[test]
    fn downcast_through_reference() {
        let mut value = 7_i64;
        let reflect = value.as_reflect_mut();
        *reflect.downcast_mut::<i64>().unwrap() += 1;
        assert_eq!(reflect.downcast_ref::<i64>(), Some(&8));
        assert!(reflect.downcast_ref::<i32>().is_none());
    }
}
