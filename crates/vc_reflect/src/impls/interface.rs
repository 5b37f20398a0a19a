/// Makes an interface box reflectable.
///
/// The trait must have [`Reflect`](crate::Reflect) as a supertrait. After
/// the call `Box<dyn Trait>` can be used as a field or container element
/// type; it is written as the concrete object it holds, and read back as
/// the concrete type registered with
/// [`TypeRegistry::register_implementation`](crate::registry::TypeRegistry::register_implementation).
///
/// # Examples
///
/// ```
/// use vc_reflect::{Reflect, impl_reflect_interface};
/// use vc_reflect::info::{TypeKind, Typed};
///
/// trait Animal: Reflect {
///     fn name(&self) -> &str;
/// }
///
/// impl_reflect_interface!(dyn Animal);
///
/// assert_eq!(<Box<dyn Animal>>::type_info().kind(), TypeKind::Interface);
/// ```
#[macro_export]
macro_rules! impl_reflect_interface {
    ($interface:ty) => {
        impl $crate::Reflect for $crate::__macro_exports::Box<$interface> {
            #[inline]
            fn resolve(&self) -> &dyn $crate::Reflect {
                $crate::Reflect::resolve(&**self)
            }

            #[inline]
            fn resolve_mut(&mut self) -> &mut dyn $crate::Reflect {
                $crate::Reflect::resolve_mut(&mut **self)
            }
        }

        impl $crate::info::Typed for $crate::__macro_exports::Box<$interface> {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::TypeInfoCell = $crate::impls::TypeInfoCell::new();
                CELL.get_or_init(|| {
                    $crate::info::TypeInfo::Interface($crate::info::InterfaceInfo::new::<Self>())
                })
            }
        }

        impl $crate::registry::GetTypeMeta for $crate::__macro_exports::Box<$interface> {
            fn get_type_meta() -> $crate::registry::TypeMeta {
                $crate::registry::TypeMeta::of::<Self>()
            }
        }
    };
}
