use crate::adapter::{AdapterKind, Collection, MapCollection};
use crate::info::Type;

// -----------------------------------------------------------------------------
// CollectionInfo

/// Type info of a sequence or set container.
///
/// The element type is `None` for type-erased containers such as
/// [`DynamicList`](crate::impls::DynamicList); it can then only be recovered
/// from AOT metadata.
#[derive(Debug, Clone)]
pub struct CollectionInfo {
    ty: Type,
    kind: AdapterKind,
    element: Option<Type>,
}

impl CollectionInfo {
    pub fn new<C: Collection>() -> Self {
        Self {
            ty: Type::of::<C>(),
            kind: C::kind(),
            element: Some(Type::of::<C::Item>()),
        }
    }

    /// Info of a container whose element type is not known statically.
    pub fn erased<C: ?Sized + 'static>(kind: AdapterKind) -> Self {
        Self {
            ty: Type::of::<C>(),
            kind,
            element: None,
        }
    }

    #[inline(always)]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    #[inline(always)]
    pub const fn kind(&self) -> AdapterKind {
        self.kind
    }

    #[inline(always)]
    pub const fn element(&self) -> Option<Type> {
        self.element
    }
}

// -----------------------------------------------------------------------------
// MapInfo

/// Type info of a key-value container.
#[derive(Debug, Clone)]
pub struct MapInfo {
    ty: Type,
    kind: AdapterKind,
    key: Option<Type>,
    value: Option<Type>,
}

impl MapInfo {
    pub fn new<M: MapCollection>() -> Self {
        Self {
            ty: Type::of::<M>(),
            kind: M::kind(),
            key: Some(Type::of::<M::Key>()),
            value: Some(Type::of::<M::Value>()),
        }
    }

    /// Info of a map whose key and value types are not known statically.
    pub fn erased<M: ?Sized + 'static>(kind: AdapterKind) -> Self {
        Self {
            ty: Type::of::<M>(),
            kind,
            key: None,
            value: None,
        }
    }

    #[inline(always)]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    #[inline(always)]
    pub const fn kind(&self) -> AdapterKind {
        self.kind
    }

    #[inline(always)]
    pub const fn key(&self) -> Option<Type> {
        self.key
    }

    #[inline(always)]
    pub const fn value(&self) -> Option<Type> {
        self.value
    }
}
