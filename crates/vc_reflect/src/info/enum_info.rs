use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::info::Type;

/// Type info of a unit-only enum, written as its variant name.
#[derive(Clone)]
pub struct EnumInfo {
    ty: Type,
    variants: &'static [&'static str],
    variant_name: fn(&dyn Reflect) -> Option<&'static str>,
    from_variant: fn(&str) -> Option<Box<dyn Reflect>>,
}

impl EnumInfo {
    /// Creates the info of `T`.
    ///
    /// `variant_name` returns `None` if the value is not a `T`;
    /// `from_variant` returns `None` for an unknown name.
    pub fn new<T: Reflect>(
        variants: &'static [&'static str],
        variant_name: fn(&dyn Reflect) -> Option<&'static str>,
        from_variant: fn(&str) -> Option<Box<dyn Reflect>>,
    ) -> Self {
        Self {
            ty: Type::of::<T>(),
            variants,
            variant_name,
            from_variant,
        }
    }

    #[inline(always)]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    /// Variant names in declaration order.
    #[inline(always)]
    pub const fn variant_names(&self) -> &'static [&'static str] {
        self.variants
    }

    #[inline]
    pub fn variant_name(&self, value: &dyn Reflect) -> Option<&'static str> {
        (self.variant_name)(value)
    }

    #[inline]
    pub fn from_variant(&self, name: &str) -> Option<Box<dyn Reflect>> {
        (self.from_variant)(name)
    }
}

impl fmt::Debug for EnumInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumInfo")
            .field("ty", &self.ty)
            .field("variants", &self.variants)
            .finish()
    }
}
