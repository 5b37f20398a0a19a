//! Runtime reflection for the object-graph serializer.
//!
//! The crate describes user types as data: every reflectable type publishes
//! a [`TypeInfo`](info::TypeInfo), a [`TypeRegistry`](registry::TypeRegistry)
//! collects them together with collection adapters and interface
//! implementations, and a [`ReflectionProvider`](provider::ReflectionProvider)
//! answers the questions a serializer asks: which fields a class has, how to
//! read and write them, how to build an instance.
//!
//! ```
//! use vc_reflect::Reflect;
//! use vc_reflect::info::Type;
//! use vc_reflect::provider::{LiveReflection, ReflectionProvider};
//! use vc_reflect::registry::TypeRegistry;
//!
//! #[derive(Reflect, Default)]
//! #[reflect(default)]
//! struct Player {
//!     name: String,
//!     level: u32,
//! }
//!
//! let mut registry = TypeRegistry::new();
//! registry.register::<Player>();
//!
//! let provider = LiveReflection::new(&registry);
//! let fields = provider.fields(Type::of::<Player>()).unwrap();
//! assert_eq!(fields[1].name(), "level");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Usually, we need to use `crate` in the crate itself and use `vc_reflect` in doc testing.
// But `macro_utils::Manifest` can only choose one, so we must have an
// `extern self` to ensure `vc_reflect` can be used as an alias for `crate`.
extern crate self as vc_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod reflection;

pub mod adapter;
pub mod aot;
pub mod hash;
pub mod impls;
pub mod info;
pub mod provider;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use error::{AccessError, ReflectError};
pub use reflection::Reflect;
pub use vc_reflect_derive as derive;
pub use vc_reflect_derive::Reflect;
