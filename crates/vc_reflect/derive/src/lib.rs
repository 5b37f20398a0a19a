//! See following macros:
//!
//! - [`Reflect`](derive_reflect)
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits:
///
/// - `Reflect`
/// - `Typed`
/// - `GetTypeMeta`
///
/// A struct with named fields (or a unit struct) becomes a class, and every
/// field is exposed under its own name. A field of type `Option<T>` is
/// declared as `T` and accepts null. An enum must only have unit variants;
/// it is written by variant name.
///
/// ## Type Attributes
///
/// ### default
///
/// The type implements `Default`, so it can be created without arguments
/// (registers `TypeTraitDefault`).
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Settings { volume: u8 }
/// ```
///
/// ### constructor / args
///
/// Classes whose fields are fixed at creation name a constructor and the
/// fields bound to its parameters, in parameter order. Those fields are
/// final: they cannot be written after construction.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(constructor = Self::new, args(x, y))]
/// struct Point { x: i32, y: i32 }
/// ```
///
/// ### post_deserialize
///
/// A `fn(&mut Self)` called once after deserialization populated the value.
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// #[reflect(default, post_deserialize = Self::rebuild_index)]
/// struct Catalog { items: Vec<String>, #[reflect(skip)] index: Vec<usize> }
/// ```
///
/// ### auto_register
///
/// Submits the type to the static table read by `TypeRegistry::auto_register`.
/// It has no effect on generic types, and is a no-op when the `auto_register`
/// feature is disabled.
///
/// ## Field Attributes
///
/// - `skip`: the field is not part of the type info. It must be filled by
///   `Default` or the constructor.
/// - `optional`: on an `Option<T>` field, null is written as an empty node
///   instead of being an error.
/// - `extends`: the field holds the base class. Its fields are listed
///   before the fields of this class, and are read and written through it.
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Entity { id: u64 }
///
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Npc {
///     #[reflect(extends)]
///     entity: Entity,
///     #[reflect(optional)]
///     dialog: Option<String>,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}
