//! Uniform reflective access for the serializer.
//!
//! [`ReflectionProvider`] is the only way the graph serializer touches
//! objects: it lists fields, reads and writes them, builds instances and
//! arrays, and recovers element types of container fields.
//!
//! Two backends are provided:
//!
//! - [`LiveReflection`]: answers everything from the [`TypeRegistry`].
//! - [`AotReflection`]: asks live reflection first and falls back to
//!   precomputed [`AotMetadata`] for element types the registry cannot
//!   recover, such as the element type of a [`DynamicList`] field.
//!
//! [`TypeRegistry`]: crate::registry::TypeRegistry
//! [`AotMetadata`]: crate::aot::AotMetadata
//! [`DynamicList`]: crate::impls::DynamicList

// -----------------------------------------------------------------------------
// Modules

mod aot;
mod live;
mod reflection_provider;

// -----------------------------------------------------------------------------
// Exports

pub use aot::AotReflection;
pub use live::LiveReflection;
pub use reflection_provider::ReflectionProvider;
