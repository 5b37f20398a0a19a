use thiserror::Error;

use crate::info::{Type, TypeKind};

// -----------------------------------------------------------------------------
// ReflectError

/// A reflective operation failed.
///
/// Raised when a type is unknown to the registry, a member cannot be found
/// or accessed, or an instance cannot be constructed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReflectError {
    #[error("type `{0}` is not registered")]
    NotRegistered(Type),
    #[error("type `{ty}` is {actual}, expected {expected}")]
    KindMismatch {
        ty: Type,
        expected: TypeKind,
        actual: TypeKind,
    },
    #[error("expected a `{expected}`, found a `{actual}`")]
    WrongType { expected: Type, actual: Type },
    #[error("an instance of `{actual}` does not hold `{class}::{field}`")]
    InstanceMismatch {
        class: Type,
        field: &'static str,
        actual: Type,
    },
    #[error("a `{actual}` cannot be assigned to `{class}::{field}`")]
    ValueMismatch {
        class: Type,
        field: &'static str,
        actual: Type,
    },
    #[error("`{class}::{field}` does not accept null")]
    NotNullable { class: Type, field: &'static str },
    #[error("`{class}::{field}` is final and can only be bound through the constructor")]
    FinalField { class: Type, field: &'static str },
    #[error("`{0}` has no zero-argument constructor")]
    NoDefaultConstructor(Type),
    #[error("`{0}` declares no constructor")]
    NoConstructor(Type),
    #[error("the constructor of `{class}` takes {expected} arguments, got {actual}")]
    ArgumentCount {
        class: Type,
        expected: usize,
        actual: usize,
    },
    #[error("constructor argument `{name}` of `{class}` is missing")]
    MissingArgument { class: Type, name: &'static str },
    #[error("constructor argument `{name}` of `{class}` expects a `{expected}`, got a `{actual}`")]
    ArgumentMismatch {
        class: Type,
        name: &'static str,
        expected: Type,
        actual: Type,
    },
    #[error("constructor argument `{name}` of `{class}` matches no field")]
    UnboundArgument { class: Type, name: &'static str },
    #[error("`{container}` cannot hold a `{actual}`")]
    ElementMismatch { container: Type, actual: Type },
    #[error("index {index} is out of bounds for `{ty}` of length {len}")]
    IndexOutOfBounds { ty: Type, index: usize, len: usize },
    #[error("`{ty}` holds exactly {expected} elements, got {actual}")]
    ArrayLength {
        ty: Type,
        expected: usize,
        actual: usize,
    },
    #[error("no collection adapter is registered for `{0}`")]
    NoAdapter(Type),
    #[error("no implementation is registered for interface `{0}`")]
    NoImplementation(Type),
}

// -----------------------------------------------------------------------------
// AccessError

/// A generated field setter rejected a write.
///
/// The provider maps it to a [`ReflectError`] naming the field.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError {
    #[error("the instance is not of the declaring type")]
    Instance,
    #[error("null written to a non-nullable field")]
    Null,
    #[error("a `{0}` does not match the field type")]
    Value(Type),
}
