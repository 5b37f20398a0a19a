//! The type descriptor model.
//!
//! Every reflectable type publishes one [`TypeInfo`] through [`Typed`]. The
//! info is built lazily on first access and never mutated afterwards, so it
//! can be shared by any number of threads.
//!
//! ## Menu
//!
//! - [`Type`]: a `Copy` handle identifying a type.
//! - [`TypeInfo`]: the closed set of shapes the serializer understands.
//!     - [`PrimitiveInfo`]: numbers, `bool`, `char`, `String`.
//!     - [`EnumInfo`]: unit-only enums, serialized by variant name.
//!     - [`ArrayInfo`]: fixed `[T; N]` and boxed `[T]` slices.
//!     - [`CollectionInfo`] / [`MapInfo`]: containers handled by adapters.
//!     - [`ClassInfo`]: plain objects with named fields.
//!     - [`InterfaceInfo`]: `Box<dyn Trait>` resolved through a registered implementation.
//! - [`FieldInfo`], [`ConstructorInfo`], [`SuperclassInfo`]: the parts of a class.

// -----------------------------------------------------------------------------
// Modules

mod array_info;
mod class_info;
mod collection_info;
mod constructor_info;
mod enum_info;
mod field_info;
mod interface_info;
mod primitive_info;
mod ty;
mod type_info;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use array_info::{Array, ArrayInfo};
pub use class_info::{ClassInfo, SuperclassInfo};
pub use collection_info::{CollectionInfo, MapInfo};
pub use constructor_info::{ConstructorArg, ConstructorArgs, ConstructorInfo};
pub use enum_info::EnumInfo;
pub use field_info::{FieldFlags, FieldGetter, FieldInfo, FieldSetter};
pub use interface_info::InterfaceInfo;
pub use primitive_info::{Primitive, PrimitiveInfo, PrimitiveKind};
pub use ty::Type;
pub use type_info::{TypeInfo, TypeKind};
pub use typed::Typed;
