use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::Reflect;
use crate::info::{Type, Typed};

// -----------------------------------------------------------------------------
// PrimitiveKind

/// The primitive shapes written as a single text leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    String,
}

impl PrimitiveKind {
    /// Returns `true` for the integer and floating point kinds.
    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::Bool | Self::Char | Self::String)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Char => "char",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "string",
        };
        f.write_str(name)
    }
}

// -----------------------------------------------------------------------------
// Primitive

/// A type written as one text leaf.
///
/// The text form is locale independent: `true`/`false` for booleans,
/// the shortest round-trip representation for floats, and the first
/// character of the text for `char`.
pub trait Primitive: Typed + Sized {
    const KIND: PrimitiveKind;

    fn to_text(&self) -> String;

    /// Parses the text form, `None` if the text is not valid for this type.
    fn from_text(text: &str) -> Option<Self>;
}

// -----------------------------------------------------------------------------
// PrimitiveInfo

/// Type info of a [`Primitive`].
#[derive(Clone)]
pub struct PrimitiveInfo {
    ty: Type,
    kind: PrimitiveKind,
    format: fn(&dyn Reflect) -> Option<String>,
    parse: fn(&str) -> Option<Box<dyn Reflect>>,
}

impl PrimitiveInfo {
    pub fn new<T: Primitive>() -> Self {
        Self {
            ty: Type::of::<T>(),
            kind: T::KIND,
            format: format_primitive::<T>,
            parse: parse_primitive::<T>,
        }
    }

    #[inline(always)]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    #[inline(always)]
    pub const fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    /// Formats `value`, `None` if it is not of this type.
    #[inline]
    pub fn format(&self, value: &dyn Reflect) -> Option<String> {
        (self.format)(value)
    }

    /// Parses `text` into a boxed value of this type.
    #[inline]
    pub fn parse(&self, text: &str) -> Option<Box<dyn Reflect>> {
        (self.parse)(text)
    }
}

impl fmt::Debug for PrimitiveInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimitiveInfo")
            .field("ty", &self.ty)
            .field("kind", &self.kind)
            .finish()
    }
}

fn format_primitive<T: Primitive>(value: &dyn Reflect) -> Option<String> {
    value.downcast_ref::<T>().map(T::to_text)
}

fn parse_primitive<T: Primitive>(text: &str) -> Option<Box<dyn Reflect>> {
    T::from_text(text).map(<T as Reflect>::into_boxed_reflect)
}
