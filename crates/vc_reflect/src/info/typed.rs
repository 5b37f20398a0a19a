use crate::Reflect;
use crate::info::TypeInfo;

/// A static accessor to compile-time type information.
///
/// Automatically implemented by [the derive macro]. For manual
/// implementations, store the info in a [`TypeInfoCell`] (non-generic types)
/// or a [`GenericTypeInfoCell`] (generic types) so it is built only once.
///
/// [the derive macro]: crate::derive::Reflect
/// [`TypeInfoCell`]: crate::impls::TypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: Reflect {
    /// Returns the compile-time info for the underlying type.
    fn type_info() -> &'static TypeInfo;
}
