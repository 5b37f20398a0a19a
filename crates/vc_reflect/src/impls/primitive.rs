use alloc::string::{String, ToString};
use core::str::FromStr;

use crate::Reflect;
use crate::impls::TypeInfoCell;
use crate::info::{Primitive, PrimitiveInfo, PrimitiveKind, TypeInfo, Typed};
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTraitDefault};

macro_rules! impl_reflect_primitive {
    ($($ty:ty),* $(,)?) => {$(
        impl Reflect for $ty {
            crate::reflection::impl_reflect_cast_fn!();
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: TypeInfoCell = TypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Primitive(PrimitiveInfo::new::<Self>()))
            }
        }

        impl GetTypeMeta for $ty {
            fn get_type_meta() -> TypeMeta {
                TypeMeta::of::<Self>().with_trait(<TypeTraitDefault as FromType<Self>>::from_type())
            }
        }
    )*};
}

macro_rules! impl_primitive_from_str {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl Primitive for $ty {
            const KIND: PrimitiveKind = PrimitiveKind::$kind;

            #[inline]
            fn to_text(&self) -> String {
                ToString::to_string(self)
            }

            #[inline]
            fn from_text(text: &str) -> Option<Self> {
                <$ty as FromStr>::from_str(text).ok()
            }
        }
    )*};
}

impl_reflect_primitive! {
    bool, char, String,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
}

impl_primitive_from_str! {
    bool => Bool,
    i8 => I8, i16 => I16, i32 => I32, i64 => I64, i128 => I128, isize => Isize,
    u8 => U8, u16 => U16, u32 => U32, u64 => U64, u128 => U128, usize => Usize,
    f32 => F32, f64 => F64,
}

impl Primitive for char {
    const KIND: PrimitiveKind = PrimitiveKind::Char;

    #[inline]
    fn to_text(&self) -> String {
        ToString::to_string(self)
    }

    /// Takes the first character; empty text is not a character.
    #[inline]
    fn from_text(text: &str) -> Option<Self> {
        text.chars().next()
    }
}

impl Primitive for String {
    const KIND: PrimitiveKind = PrimitiveKind::String;

    #[inline]
    fn to_text(&self) -> String {
        self.clone()
    }

    #[inline]
    fn from_text(text: &str) -> Option<Self> {
        Some(text.into())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::info::{Primitive, PrimitiveKind, TypeInfo, Typed};

    #[test]
    fn text_forms() {
        assert_eq!(true.to_text(), "true");
        assert_eq!(0.1_f64.to_text(), "0.1");
        assert_eq!(f32::from_text("1.5"), Some(1.5));
        assert_eq!(i8::from_text("128"), None);
        assert_eq!(char::from_text("xyz"), Some('x'));
        assert_eq!(char::from_text(""), None);
        assert_eq!(String::from_text(" a b "), Some(String::from(" a b ")));
    }

    #[test]
    fn primitive_info() {
        let TypeInfo::Primitive(info) = u16::type_info() else {
            panic!("u16 should be a primitive");
        };
        assert_eq!(info.kind(), PrimitiveKind::U16);
        assert_eq!(info.format(&7_u16).as_deref(), Some("7"));
        assert!(info.format(&7_u32).is_none());
        assert_eq!(info.parse("9").unwrap().downcast_ref::<u16>(), Some(&9));
    }
}
