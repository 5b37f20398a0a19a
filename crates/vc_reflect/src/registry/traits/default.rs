use alloc::boxed::Box;

use crate::Reflect;
use crate::info::Typed;
use crate::registry::{FromType, TypeTrait};

/// The zero-argument constructor of a type.
///
/// Registered for classes marked `#[reflect(default)]` and for every
/// built-in container.
#[derive(Clone)]
pub struct TypeTraitDefault {
    func: fn() -> Box<dyn Reflect>,
}

impl TypeTraitDefault {
    #[inline(always)]
    pub fn default(&self) -> Box<dyn Reflect> {
        (self.func)()
    }
}

impl<T: Default + Typed> FromType<T> for TypeTraitDefault {
    fn from_type() -> Self {
        Self {
            func: || Box::<T>::default(),
        }
    }
}

impl TypeTrait for TypeTraitDefault {}
