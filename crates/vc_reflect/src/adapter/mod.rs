//! Uniform views over container types.
//!
//! The serializer does not know `Vec`, `BTreeSet` or `HashMap`; it sees a
//! [`CollectionAdapter`] or a [`MapAdapter`] stored in the container's
//! [`TypeMeta`]. Adapters are built once, when the container type is
//! registered, and never change afterwards.
//!
//! - [`AdapterKind`]: the closed set of container shapes.
//! - [`Collection`] / [`MapCollection`]: implemented by concrete containers.
//! - [`CollectionAdapter`] / [`MapAdapter`]: the type-erased views.
//! - [`Implementation`]: the concrete type built for an interface.
//!
//! [`TypeMeta`]: crate::registry::TypeMeta

// -----------------------------------------------------------------------------
// Modules

mod collection;
mod implementation;
mod kind;
mod map;

// -----------------------------------------------------------------------------
// Exports

pub use collection::{Collection, CollectionAdapter};
pub use implementation::Implementation;
pub use kind::AdapterKind;
pub use map::{MapAdapter, MapCollection};
