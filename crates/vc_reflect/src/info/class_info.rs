use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::Reflect;
use crate::info::{ConstructorInfo, FieldInfo, Type, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// SuperclassInfo

/// The base class embedded in a class, with projections onto it.
#[derive(Clone)]
pub struct SuperclassInfo {
    ty: Type,
    get: for<'a> fn(&'a dyn Reflect) -> Option<&'a dyn Reflect>,
    get_mut: for<'a> fn(&'a mut dyn Reflect) -> Option<&'a mut dyn Reflect>,
}

impl SuperclassInfo {
    #[inline(always)]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    /// Projects an instance of the subclass onto its base.
    #[inline]
    pub fn project<'a>(&self, instance: &'a dyn Reflect) -> Option<&'a dyn Reflect> {
        (self.get)(instance)
    }

    /// Projects an instance of the subclass onto its base, mutably.
    #[inline]
    pub fn project_mut<'a>(&self, instance: &'a mut dyn Reflect) -> Option<&'a mut dyn Reflect> {
        (self.get_mut)(instance)
    }
}

impl fmt::Debug for SuperclassInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SuperclassInfo").field(&self.ty).finish()
    }
}

// -----------------------------------------------------------------------------
// ClassInfo

/// Type info of a plain object with named fields.
///
/// [`ClassInfo::fields`] walks the superclass chain: inherited fields come
/// first, in the base's own order, followed by the fields declared here.
/// The list is flattened once when the info is built.
#[derive(Clone)]
pub struct ClassInfo {
    ty: Type,
    fields: Box<[FieldInfo]>,
    inherited: usize,
    superclass: Option<SuperclassInfo>,
    constructor: Option<ConstructorInfo>,
    post_deserialize: Option<fn(&mut dyn Reflect)>,
}

impl ClassInfo {
    /// Creates the info of `T` with the fields it declares.
    pub fn new<T: Reflect>(fields: impl Into<Box<[FieldInfo]>>) -> Self {
        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            inherited: 0,
            superclass: None,
            constructor: None,
            post_deserialize: None,
        }
    }

    /// Declares `B` as the base class, embedded in this one.
    ///
    /// The fields of `B` are placed before the fields of this class. Field
    /// names are the wire identity, so they must stay unique across the
    /// flattened chain.
    ///
    /// # Panics
    ///
    /// Panics if `B` is not a class, or if this class declares a field with
    /// the name of a field of `B`.
    pub fn with_superclass<B: Typed>(
        mut self,
        get: for<'a> fn(&'a dyn Reflect) -> Option<&'a dyn Reflect>,
        get_mut: for<'a> fn(&'a mut dyn Reflect) -> Option<&'a mut dyn Reflect>,
    ) -> Self {
        let base = match B::type_info() {
            TypeInfo::Class(info) => info,
            other => panic!(
                "`{}` extends `{}`, which is {} rather than a class",
                self.ty,
                other.ty(),
                other.kind(),
            ),
        };

        if let Some(field) = self
            .own_fields()
            .iter()
            .find(|field| base.field(field.name()).is_some())
        {
            panic!(
                "`{}::{}` shadows a field of its base class `{}`",
                self.ty,
                field.name(),
                base.ty(),
            );
        }

        let fields: Vec<FieldInfo> = base
            .fields()
            .iter()
            .chain(self.own_fields())
            .cloned()
            .collect();

        self.inherited = base.fields().len();
        self.fields = fields.into_boxed_slice();
        self.superclass = Some(SuperclassInfo {
            ty: Type::of::<B>(),
            get,
            get_mut,
        });
        self
    }

    #[inline]
    pub fn with_constructor(mut self, constructor: ConstructorInfo) -> Self {
        self.constructor = Some(constructor);
        self
    }

    /// Registers a hook run once after deserialization populated the instance.
    #[inline]
    pub fn with_post_deserialize(mut self, hook: fn(&mut dyn Reflect)) -> Self {
        self.post_deserialize = Some(hook);
        self
    }

    #[inline(always)]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    /// All serializable fields, superclass fields first.
    #[inline(always)]
    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    /// The fields declared on this class only.
    #[inline]
    pub fn own_fields(&self) -> &[FieldInfo] {
        &self.fields[self.inherited..]
    }

    /// Looks up a field by name, the most derived declaration first.
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.iter().rev().find(|field| field.name() == name)
    }

    #[inline]
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(FieldInfo::name)
    }

    #[inline(always)]
    pub const fn superclass(&self) -> Option<&SuperclassInfo> {
        self.superclass.as_ref()
    }

    #[inline(always)]
    pub const fn constructor(&self) -> Option<&ConstructorInfo> {
        self.constructor.as_ref()
    }

    #[inline(always)]
    pub const fn post_deserialize(&self) -> Option<fn(&mut dyn Reflect)> {
        self.post_deserialize
    }
}

impl fmt::Debug for ClassInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassInfo")
            .field("ty", &self.ty)
            .field("fields", &self.fields)
            .field("superclass", &self.superclass)
            .field("constructor", &self.constructor)
            .field("post_deserialize", &self.post_deserialize.is_some())
            .finish()
    }
}
