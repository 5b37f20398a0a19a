//! Type registry for non-object information querying.
//!
//! ## Menu
//!
//! - [`TypeTrait`]: A capability supported by a type, stored type-erased.
//! - [`FromType`]: Creates a `TypeTrait` from a type.
//! - [`TypeMeta`]: A [`TypeInfo`] plus a [`TypeTrait`] table.
//! - [`GetTypeMeta`]: Creates the `TypeMeta` of a type.
//! - [`TypeRegistry`]: Stores `TypeMeta`s and the interface implementation table.
//! - TypeTraits:
//!     - [`TypeTraitDefault`]: zero-argument construction.
//!     - [`CollectionAdapter`]: the uniform view of a sequence or set.
//!     - [`MapAdapter`]: the uniform view of a key-value container.
//!
//! ## auto_register
//!
//! See [`TypeRegistry::auto_register`].
//!
//! We use [`inventory`] crate to implement static registration,
//! not all platforms support it (although major platforms do).
//! If it is not supported the function returns `false` without
//! causing any error, and types must be registered by hand.
//!
//! [`TypeInfo`]: crate::info::TypeInfo
//! [`CollectionAdapter`]: crate::adapter::CollectionAdapter
//! [`MapAdapter`]: crate::adapter::MapAdapter

// -----------------------------------------------------------------------------
// Modules

mod from_type;
mod traits;
mod type_meta;
mod type_registry;
mod type_trait;

// -----------------------------------------------------------------------------
// Exports

pub use from_type::FromType;
pub use traits::TypeTraitDefault;
pub use type_meta::{GetTypeMeta, TypeMeta};
pub use type_registry::TypeRegistry;
pub use type_trait::TypeTrait;
