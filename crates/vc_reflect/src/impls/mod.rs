//! Reflection for foreign types, and the utilities used to implement it.
//!
//! - [`TypeInfoCell`]: Used to implement [`Typed`] for non-generic types.
//! - [`GenericTypeInfoCell`]: Used to implement [`Typed`] for generic types.
//! - [`DynamicList`] / [`DynamicMap`]: containers of untyped values.
//! - [`impl_reflect_interface`]: makes `Box<dyn Trait>` reflectable.
//!
//! ## Implemented Menu
//!
//! - primitives:
//!     - `bool`, `char`, `String`
//!     - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//! - arrays: `[T; N]`, `Box<[T]>`
//! - lists: `Vec<T>`, `VecDeque<T>`
//! - sets: `BTreeSet<T>`, `std::collections::HashSet<T, S>`, `hashbrown::HashSet<T, S>`
//! - maps: `BTreeMap<K, V>`, `std::collections::HashMap<K, V, S>`, `hashbrown::HashMap<K, V, S>`
//!
//! [`Typed`]: crate::info::Typed
//! [`impl_reflect_interface`]: crate::impl_reflect_interface

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod interface;

mod array;
mod dynamic;
mod list;
mod map;
mod primitive;
mod set;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, TypeInfoCell};
pub use dynamic::{DynamicList, DynamicMap};

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements `Reflect`, `Typed` and `GetTypeMeta` for a generic container.
///
/// `$variant($info)` picks the [`TypeInfo`](crate::info::TypeInfo) variant,
/// `$adapter` the adapter type trait, and `$dep` the types registered along
/// with the container.
macro_rules! impl_reflect_container {
    (
        [$($generics:tt)*] $ty:ty,
        $variant:ident($info:ident),
        $adapter:ident,
        [$($dep:ident),*]
    ) => {
        impl<$($generics)*> $crate::Reflect for $ty {
            $crate::reflection::impl_reflect_cast_fn!();
        }

        impl<$($generics)*> $crate::info::Typed for $ty {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::GenericTypeInfoCell = $crate::impls::GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    $crate::info::TypeInfo::$variant($crate::info::$info::new::<Self>())
                })
            }
        }

        impl<$($generics)*> $crate::registry::GetTypeMeta for $ty {
            fn get_type_meta() -> $crate::registry::TypeMeta {
                $crate::registry::TypeMeta::of::<Self>()
                    .with_trait(<$crate::adapter::$adapter as $crate::registry::FromType<Self>>::from_type())
                    .with_trait(<$crate::registry::TypeTraitDefault as $crate::registry::FromType<Self>>::from_type())
            }

            fn register_dependencies(registry: &mut $crate::registry::TypeRegistry) {
                $(registry.register::<$dep>();)*
            }
        }
    };
}

pub(crate) use impl_reflect_container;
