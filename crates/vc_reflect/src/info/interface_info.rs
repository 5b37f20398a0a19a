use crate::info::Type;

/// Type info of an interface box such as `Box<dyn Shape>`.
///
/// The concrete type to build on deserialization comes from
/// [`TypeRegistry::register_implementation`](crate::registry::TypeRegistry::register_implementation).
#[derive(Debug, Clone)]
pub struct InterfaceInfo {
    ty: Type,
}

impl InterfaceInfo {
    #[inline]
    pub fn new<T: ?Sized + 'static>() -> Self {
        Self { ty: Type::of::<T>() }
    }

    #[inline(always)]
    pub const fn ty(&self) -> Type {
        self.ty
    }
}
