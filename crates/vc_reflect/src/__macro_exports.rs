//! Items used by the code that `#[derive(Reflect)]` and the crate's
//! `macro_rules!` macros expand to. Not a public API.

pub use alloc::boxed::Box;

#[cfg(feature = "auto_register")]
pub use inventory;

#[cfg(feature = "auto_register")]
use crate::registry::TypeRegistry;
use crate::{AccessError, Reflect};

// -----------------------------------------------------------------------------
// Auto registration

/// A registration function submitted by `#[reflect(auto_register)]`.
#[cfg(feature = "auto_register")]
pub struct AutoRegistration(pub fn(&mut TypeRegistry));

#[cfg(feature = "auto_register")]
inventory::collect!(AutoRegistration);

// -----------------------------------------------------------------------------
// Field setters

/// Unpacks the value written to a non-nullable field.
pub fn take_field<T: Reflect>(value: Option<Box<dyn Reflect>>) -> Result<T, AccessError> {
    match value {
        None => Err(AccessError::Null),
        Some(value) => value
            .take::<T>()
            .map_err(|value| AccessError::Value(value.reflect_type())),
    }
}

/// Unpacks the value written to an `Option<T>` field.
pub fn take_nullable_field<T: Reflect>(
    value: Option<Box<dyn Reflect>>,
) -> Result<Option<T>, AccessError> {
    match value {
        None => Ok(None),
        Some(value) => value
            .take::<T>()
            .map(Some)
            .map_err(|value| AccessError::Value(value.reflect_type())),
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::{take_field, take_nullable_field};
    use crate::info::Type;
    use crate::{AccessError, Reflect};

    #[test]
    fn take_field_rejects_null_and_foreign_values() {
        assert_eq!(take_field::<u8>(Some(3_u8.into_boxed_reflect())), Ok(3));
        assert_eq!(take_field::<u8>(None), Err(AccessError::Null));
        assert_eq!(
            take_field::<u8>(Some(String::new().into_boxed_reflect())),
            Err(AccessError::Value(Type::of::<String>()))
        );
    }

    #[test]
    fn take_nullable_field_accepts_null() {
        assert_eq!(take_nullable_field::<u8>(None), Ok(None));
        assert_eq!(take_nullable_field::<u8>(Some(1_u8.into_boxed_reflect())), Ok(Some(1)));
    }
}
