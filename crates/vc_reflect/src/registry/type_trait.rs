use core::any::Any;

/// A capability of a registered type, stored in its [`TypeMeta`].
///
/// Type traits are plain structs of function pointers built through
/// [`FromType`], so looking one up never needs the concrete type.
///
/// [`TypeMeta`]: crate::registry::TypeMeta
/// [`FromType`]: crate::registry::FromType
pub trait TypeTrait: Any + Send + Sync {}

impl dyn TypeTrait {
    #[inline]
    pub fn downcast_ref<T: TypeTrait>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }
}
