use thiserror::Error;
use vc_reflect::ReflectError;
use vc_reflect::info::Type;

// -----------------------------------------------------------------------------
// GraphError

/// A serialize or deserialize call failed.
///
/// Every failure is fatal to the call that raised it; no partial graph is
/// returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GraphError {
    /// A non-optional field held null while writing, or a required value
    /// (field or constructor argument) had no source while reading.
    #[error("`{class}::{field}` is required but has no value")]
    RequiredField { class: Type, field: &'static str },
    /// A wire node named no field of the class.
    #[error("`{class}` has no field named `{field}`")]
    UnknownField { class: Type, field: String },
    /// The type is unregistered, or has no shape the graph can express.
    #[error("`{0}` is not a primitive, enum, array, collection, map or class")]
    UnsupportedType(Type),
    #[error(transparent)]
    Reflection(#[from] ReflectError),
    #[error("cannot read `{text}` as a `{ty}`")]
    Parse { ty: Type, text: String },
    #[error("expected a <{expected}> node, found <{found}>")]
    UnexpectedNode { expected: String, found: String },
    #[error("node <{name}> holds {found}, expected {expected}")]
    UnexpectedContent {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
    /// A null node where a value is required, e.g. a collection element.
    #[error("node <{name}> is null, a `{ty}` is required")]
    NullValue { name: String, ty: Type },
    #[error("a map <entry> must hold exactly one <key> and one <value>")]
    MalformedEntry,
    #[cfg(feature = "json")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
