use crate::info::Typed;

/// Creates a [`TypeTrait`](crate::registry::TypeTrait) for a concrete type.
///
/// Implemented by every type trait so that [`TypeMeta`] can be filled with
/// the capabilities of `T` at registration time.
///
/// [`TypeMeta`]: crate::registry::TypeMeta
pub trait FromType<T: Typed> {
    fn from_type() -> Self;
}
