use core::fmt;

use crate::info::{PrimitiveKind, TypeInfo, Typed};

/// The shape of a container, as seen by the serializer.
///
/// Ordered kinds keep their element order through a round trip. Unordered
/// kinds are written in whatever order the container iterates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdapterKind {
    /// A growable sequence such as `Vec<T>` or `VecDeque<T>`.
    List,
    /// A hash-backed set.
    Set,
    /// A set iterating in key order.
    OrderedSet,
    /// A hash-backed map.
    Map,
    /// A map iterating in key order or insertion order.
    OrderedMap,
    /// A sequence of scalar primitives such as `Vec<u8>` or `Vec<f64>`.
    PrimitiveArray(PrimitiveKind),
}

impl AdapterKind {
    /// The kind of a sequence holding `T`.
    ///
    /// Scalars give [`AdapterKind::PrimitiveArray`]; strings and everything
    /// else give [`AdapterKind::List`].
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_reflect::adapter::AdapterKind;
    /// use vc_reflect::info::PrimitiveKind;
    ///
    /// assert_eq!(AdapterKind::sequence_of::<i32>(), AdapterKind::PrimitiveArray(PrimitiveKind::I32));
    /// assert_eq!(AdapterKind::sequence_of::<String>(), AdapterKind::List);
    /// ```
    pub fn sequence_of<T: Typed>() -> Self {
        match T::type_info() {
            TypeInfo::Primitive(info) if info.kind() != PrimitiveKind::String => {
                Self::PrimitiveArray(info.kind())
            }
            _ => Self::List,
        }
    }

    #[inline]
    pub const fn is_map(self) -> bool {
        matches!(self, Self::Map | Self::OrderedMap)
    }

    /// Returns `true` if iteration order survives a round trip.
    #[inline]
    pub const fn is_ordered(self) -> bool {
        !matches!(self, Self::Set | Self::Map)
    }
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => f.write_str("list"),
            Self::Set => f.write_str("set"),
            Self::OrderedSet => f.write_str("ordered set"),
            Self::Map => f.write_str("map"),
            Self::OrderedMap => f.write_str("ordered map"),
            Self::PrimitiveArray(kind) => write!(f, "{kind} array"),
        }
    }
}
