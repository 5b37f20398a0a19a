use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Ident, Path};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Type level `#[reflect(...)]` attributes.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `default`: the type implements `Default`.
    pub default: Option<Span>,
    /// `auto_register`: submit the type to the static registration table.
    pub auto_register: Option<Span>,
    /// `constructor = path`
    pub constructor: Option<Path>,
    /// `args(a, b, ...)`: the fields bound to the constructor parameters.
    pub args: Option<(Span, Vec<Ident>)>,
    /// `post_deserialize = path`
    pub post_deserialize: Option<Path>,
}

impl TypeAttributes {
    /// Parse all `#[reflect(...)]` attributes of a type.
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }
        this.validity()?;
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("default") {
            super::set_flag(&mut self.default, &meta)
        } else if meta.path.is_ident("auto_register") {
            super::set_flag(&mut self.auto_register, &meta)
        } else if meta.path.is_ident("constructor") {
            if self.constructor.is_some() {
                return Err(meta.error("duplicate `constructor` attribute"));
            }
            self.constructor = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("post_deserialize") {
            if self.post_deserialize.is_some() {
                return Err(meta.error("duplicate `post_deserialize` attribute"));
            }
            self.post_deserialize = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("args") {
            if self.args.is_some() {
                return Err(meta.error("duplicate `args` attribute"));
            }
            let mut names: Vec<Ident> = Vec::new();
            meta.parse_nested_meta(|arg| {
                let Some(name) = arg.path.get_ident() else {
                    return Err(arg.error("expected a field name"));
                };
                if names.contains(name) {
                    return Err(arg.error(format_args!("`{name}` is bound twice")));
                }
                names.push(name.clone());
                Ok(())
            })?;
            self.args = Some((meta.path.segments[0].ident.span(), names));
            Ok(())
        } else {
            Err(meta.error(format_args!(
                "unsupported type attribute `{}`, expected one of \
                 `default`, `auto_register`, `constructor`, `args`, `post_deserialize`",
                crate::utils::path_name(&meta.path),
            )))
        }
    }

    fn validity(&self) -> syn::Result<()> {
        if let Some((span, _)) = &self.args
            && self.constructor.is_none()
        {
            return Err(syn::Error::new(
                *span,
                "`args` requires a `constructor = path` attribute",
            ));
        }
        Ok(())
    }

    /// The constructor argument names, empty when there is no constructor.
    pub fn constructor_args(&self) -> &[Ident] {
        self.args.as_ref().map(|(_, args)| args.as_slice()).unwrap_or_default()
    }

    /// Rejects the attributes that only apply to classes.
    pub fn reject_class_only(&self, kind: &str) -> syn::Result<()> {
        let span = match (&self.constructor, &self.post_deserialize) {
            (Some(path), _) | (None, Some(path)) => path.segments[0].ident.span(),
            (None, None) => return Ok(()),
        };
        Err(syn::Error::new(
            span,
            format_args!("`constructor` and `post_deserialize` are not supported on {kind}"),
        ))
    }
}
