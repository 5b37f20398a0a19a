use alloc::boxed::Box;
use core::fmt;

use bitflags::bitflags;

use crate::info::Type;
use crate::{AccessError, Reflect};

// -----------------------------------------------------------------------------
// FieldFlags

bitflags! {
    /// Serialization flags of a [`FieldInfo`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FieldFlags: u8 {
        /// A null value is written as an empty leaf instead of failing.
        const OPTIONAL = 1;
        /// The field is an `Option<T>` and can hold null.
        const NULLABLE = 1 << 1;
    }
}

// -----------------------------------------------------------------------------
// FieldInfo

/// Reads a field from an instance of its declaring type.
///
/// Returns `None` if the instance is of another type, `Some(None)` for null.
pub type FieldGetter = for<'a> fn(&'a dyn Reflect) -> Option<Option<&'a dyn Reflect>>;

/// Writes a field on an instance of its declaring type, `None` writes null.
pub type FieldSetter = fn(&mut dyn Reflect, Option<Box<dyn Reflect>>) -> Result<(), AccessError>;

/// One serializable member of a class.
///
/// The name is the stable wire identity of the field. A field without a
/// setter is final: it can only be bound through the class constructor.
///
/// For an `Option<T>` field the declared type is `T` and the field is
/// [`NULLABLE`](FieldFlags::NULLABLE).
#[derive(Clone)]
pub struct FieldInfo {
    name: &'static str,
    ty: Type,
    declaring: Type,
    flags: FieldFlags,
    getter: FieldGetter,
    setter: Option<FieldSetter>,
}

impl FieldInfo {
    /// Creates a final field of type `T` declared on `Owner`.
    pub fn new<Owner: Reflect, T: ?Sized + 'static>(name: &'static str, getter: FieldGetter) -> Self {
        Self {
            name,
            ty: Type::of::<T>(),
            declaring: Type::of::<Owner>(),
            flags: FieldFlags::empty(),
            getter,
            setter: None,
        }
    }

    /// Makes the field writable outside the constructor.
    #[inline]
    pub fn with_setter(mut self, setter: FieldSetter) -> Self {
        self.setter = Some(setter);
        self
    }

    #[inline]
    pub fn with_flags(mut self, flags: FieldFlags) -> Self {
        self.flags |= flags;
        self
    }

    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The declared type, without the `Option` layer.
    #[inline(always)]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    /// The class that declares this field.
    #[inline(always)]
    pub const fn declaring(&self) -> Type {
        self.declaring
    }

    #[inline(always)]
    pub const fn flags(&self) -> FieldFlags {
        self.flags
    }

    #[inline]
    pub const fn is_optional(&self) -> bool {
        self.flags.contains(FieldFlags::OPTIONAL)
    }

    #[inline]
    pub const fn is_nullable(&self) -> bool {
        self.flags.contains(FieldFlags::NULLABLE)
    }

    #[inline]
    pub const fn is_final(&self) -> bool {
        self.setter.is_none()
    }

    #[inline(always)]
    pub const fn getter(&self) -> FieldGetter {
        self.getter
    }

    #[inline(always)]
    pub const fn setter(&self) -> Option<FieldSetter> {
        self.setter
    }
}

impl fmt::Debug for FieldInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldInfo")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("declaring", &self.declaring)
            .field("flags", &self.flags)
            .field("final", &self.is_final())
            .finish()
    }
}
