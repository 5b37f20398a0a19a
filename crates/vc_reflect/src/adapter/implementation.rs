use alloc::boxed::Box;
use alloc::sync::Arc;
use core::fmt;

use crate::info::{Type, Typed};
use crate::{Reflect, ReflectError};

type WrapFn = dyn Fn(Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>> + Send + Sync;

/// The concrete type the reader builds for an interface type.
///
/// A field declared as `Box<dyn Shape>` cannot be instantiated; the reader
/// builds the registered concrete type instead, then wraps it back into
/// the interface box.
#[derive(Clone)]
pub struct Implementation {
    interface: Type,
    concrete: Type,
    wrap: Arc<WrapFn>,
}

impl Implementation {
    pub fn new<I: Typed, C: Typed>(wrap: fn(C) -> I) -> Self {
        Self {
            interface: Type::of::<I>(),
            concrete: Type::of::<C>(),
            wrap: Arc::new(move |value: Box<dyn Reflect>| -> Result<Box<dyn Reflect>, Box<dyn Reflect>> {
                let concrete = value.take::<C>()?;
                Ok(Box::new(wrap(concrete)) as Box<dyn Reflect>)
            }),
        }
    }

    #[inline(always)]
    pub const fn interface(&self) -> Type {
        self.interface
    }

    #[inline(always)]
    pub const fn concrete(&self) -> Type {
        self.concrete
    }

    /// Turns a built concrete value into the interface value.
    pub fn wrap(&self, value: Box<dyn Reflect>) -> Result<Box<dyn Reflect>, ReflectError> {
        (self.wrap)(value).map_err(|value| ReflectError::WrongType {
            expected: self.concrete,
            actual: value.reflect_type(),
        })
    }
}

impl fmt::Debug for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Implementation")
            .field("interface", &self.interface)
            .field("concrete", &self.concrete)
            .finish_non_exhaustive()
    }
}
