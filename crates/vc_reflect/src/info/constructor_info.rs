use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::info::Type;
use crate::{Reflect, ReflectError};

// -----------------------------------------------------------------------------
// ConstructorArg

/// A named constructor parameter, bound to the field of the same name.
#[derive(Debug, Clone, Copy)]
pub struct ConstructorArg {
    name: &'static str,
    ty: Type,
}

impl ConstructorArg {
    /// A parameter of type `T`; for an `Option<T>` field pass `T`.
    #[inline]
    pub fn new<T: ?Sized + 'static>(name: &'static str) -> Self {
        Self {
            name,
            ty: Type::of::<T>(),
        }
    }

    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline(always)]
    pub const fn ty(&self) -> Type {
        self.ty
    }
}

// -----------------------------------------------------------------------------
// ConstructorInfo

/// The constructor used to build immutable classes.
///
/// Arguments are supplied positionally, in parameter order.
#[derive(Clone)]
pub struct ConstructorInfo {
    args: Box<[ConstructorArg]>,
    invoke: fn(&mut ConstructorArgs) -> Result<Box<dyn Reflect>, ReflectError>,
}

impl ConstructorInfo {
    pub fn new(
        args: impl Into<Box<[ConstructorArg]>>,
        invoke: fn(&mut ConstructorArgs) -> Result<Box<dyn Reflect>, ReflectError>,
    ) -> Self {
        Self {
            args: args.into(),
            invoke,
        }
    }

    #[inline(always)]
    pub fn args(&self) -> &[ConstructorArg] {
        &self.args
    }

    /// Calls the constructor.
    ///
    /// Fails if the argument count differs or an argument has the wrong type.
    pub fn invoke(&self, mut args: ConstructorArgs) -> Result<Box<dyn Reflect>, ReflectError> {
        if args.values.len() != self.args.len() {
            return Err(ReflectError::ArgumentCount {
                class: args.class,
                expected: self.args.len(),
                actual: args.values.len(),
            });
        }
        (self.invoke)(&mut args)
    }
}

impl fmt::Debug for ConstructorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorInfo")
            .field("args", &self.args)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// ConstructorArgs

/// Argument values collected for one constructor call.
///
/// A slot holding `None` is a null argument.
pub struct ConstructorArgs {
    class: Type,
    names: Vec<&'static str>,
    values: Vec<Option<Box<dyn Reflect>>>,
}

impl ConstructorArgs {
    pub fn new(class: Type) -> Self {
        Self {
            class,
            names: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Appends the next positional argument.
    pub fn push(&mut self, name: &'static str, value: Option<Box<dyn Reflect>>) {
        self.names.push(name);
        self.values.push(value);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Moves the non-null argument at `index` out as a `T`.
    pub fn take<T: Reflect>(&mut self, index: usize) -> Result<T, ReflectError> {
        match self.take_nullable::<T>(index)? {
            Some(value) => Ok(value),
            None => Err(ReflectError::MissingArgument {
                class: self.class,
                name: self.name(index),
            }),
        }
    }

    /// Moves the argument at `index` out as an `Option<T>`.
    pub fn take_nullable<T: Reflect>(&mut self, index: usize) -> Result<Option<T>, ReflectError> {
        let name = self.name(index);
        let Some(slot) = self.values.get_mut(index) else {
            return Err(ReflectError::MissingArgument {
                class: self.class,
                name,
            });
        };
        match slot.take() {
            None => Ok(None),
            Some(value) => match value.take::<T>() {
                Ok(value) => Ok(Some(value)),
                Err(value) => Err(ReflectError::ArgumentMismatch {
                    class: self.class,
                    name,
                    expected: Type::of::<T>(),
                    actual: value.reflect_type(),
                }),
            },
        }
    }

    fn name(&self, index: usize) -> &'static str {
        self.names.get(index).copied().unwrap_or("<unnamed>")
    }
}

impl fmt::Debug for ConstructorArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorArgs")
            .field("class", &self.class)
            .field("names", &self.names)
            .finish()
    }
}
