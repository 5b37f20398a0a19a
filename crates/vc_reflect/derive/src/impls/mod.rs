// -----------------------------------------------------------------------------
// Modules

mod match_reflect;

mod class_kind;
mod enum_kind;

mod auto_register;
mod trait_get_type_meta;
mod trait_reflect;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use match_reflect::match_reflect_impls;

use auto_register::get_auto_register_impl;
use class_kind::impl_class;
use enum_kind::impl_enum;
use trait_get_type_meta::impl_trait_get_type_meta;
use trait_reflect::impl_trait_reflect;
use trait_typed::impl_trait_typed;
