use vc_reflect::info::{ClassInfo, TypeInfo};
use vc_reflect::provider::ReflectionProvider;
use vc_reflect::{Reflect, ReflectError};

use crate::node::{ENTRY_TAG, KEY_TAG, Node, VALUE_TAG};
use crate::{GraphConfig, GraphError};

// -----------------------------------------------------------------------------
// GraphSerializer

/// Writes a value as a tree of named nodes.
///
/// The walk is depth-first, pre-order, and never mutates the source value.
/// A serializer only borrows its provider and configuration, so any number
/// of them can run at once over the same registry.
pub struct GraphSerializer<'a, P: ReflectionProvider + ?Sized> {
    provider: &'a P,
    config: &'a GraphConfig,
}

impl<'a, P: ReflectionProvider + ?Sized> GraphSerializer<'a, P> {
    #[inline]
    pub const fn new(provider: &'a P, config: &'a GraphConfig) -> Self {
        Self { provider, config }
    }

    /// Writes `value` under the configured root tag.
    pub fn serialize(&self, value: &dyn Reflect) -> Result<Node, GraphError> {
        log::debug!(
            "serializing `{}` as <{}>",
            value.resolve().reflect_type(),
            self.config.root_tag(),
        );
        self.write(Some(value), self.config.root_tag())
    }

    fn write(&self, value: Option<&dyn Reflect>, name: &str) -> Result<Node, GraphError> {
        let Some(value) = value else {
            return Ok(Node::null(name));
        };
        let value = value.resolve();
        let ty = value.reflect_type();
        let info = self
            .provider
            .type_info(ty)
            .map_err(|_| GraphError::UnsupportedType(ty))?;

        match info {
            TypeInfo::Primitive(info) => info
                .format(value)
                .map(|text| Node::text(name, text))
                .ok_or(GraphError::UnsupportedType(ty)),
            TypeInfo::Enum(info) => info
                .variant_name(value)
                .map(|variant| Node::text(name, variant))
                .ok_or(GraphError::UnsupportedType(ty)),
            TypeInfo::Array(_) => {
                let len = self.provider.array_length(value)?;
                let mut children = Vec::with_capacity(len);
                for index in 0..len {
                    let element = self.provider.array_get(value, index)?;
                    children.push(self.write(Some(element), VALUE_TAG)?);
                }
                Ok(Node::children(name, children))
            }
            TypeInfo::Collection(_) => {
                let adapter = self
                    .provider
                    .registry()
                    .adapter_for(ty)
                    .ok_or(ReflectError::NoAdapter(ty))?;
                let children = adapter
                    .iter(value)?
                    .map(|element| self.write(Some(element), VALUE_TAG))
                    .collect::<Result<_, _>>()?;
                Ok(Node::children(name, children))
            }
            TypeInfo::Map(_) => {
                let adapter = self
                    .provider
                    .registry()
                    .map_adapter_for(ty)
                    .ok_or(ReflectError::NoAdapter(ty))?;
                let children = adapter
                    .entries(value)?
                    .map(|(key, value)| {
                        let key = self.write(Some(key), KEY_TAG)?;
                        let value = self.write(Some(value), VALUE_TAG)?;
                        Ok(Node::children(ENTRY_TAG, vec![key, value]))
                    })
                    .collect::<Result<_, GraphError>>()?;
                Ok(Node::children(name, children))
            }
            TypeInfo::Class(info) => self.write_class(info, value, name),
            TypeInfo::Interface(_) => Err(GraphError::UnsupportedType(ty)),
        }
    }

    fn write_class(&self, info: &ClassInfo, value: &dyn Reflect, name: &str) -> Result<Node, GraphError> {
        let mut children = Vec::with_capacity(info.fields().len());
        for field in info.fields() {
            let field_value = self.provider.get(field, value)?;
            if field_value.is_none() && !field.is_optional() {
                return Err(GraphError::RequiredField {
                    class: field.declaring(),
                    field: field.name(),
                });
            }
            log::trace!("writing `{}::{}`", field.declaring(), field.name());
            children.push(self.write(field_value, field.name())?);
        }
        Ok(Node::children(name, children))
    }
}

/// Writes `value` as a node tree, see [`GraphSerializer`].
#[inline]
pub fn to_node<P: ReflectionProvider + ?Sized>(
    provider: &P,
    config: &GraphConfig,
    value: &dyn Reflect,
) -> Result<Node, GraphError> {
    GraphSerializer::new(provider, config).serialize(value)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use vc_reflect::Reflect;
    use vc_reflect::provider::LiveReflection;
    use vc_reflect::registry::TypeRegistry;

    use super::to_node;
    use crate::{GraphConfig, GraphError, Node};

    #[derive(Reflect, Default)]
    #[reflect(default)]
    struct Shapes {
        grid: [u8; 3],
        names: BTreeSet<String>,
        lookup: BTreeMap<u32, bool>,
    }

    #[derive(Reflect, Default)]
    #[reflect(default)]
    struct Labels {
        title: Option<String>,
        #[reflect(optional)]
        subtitle: Option<String>,
    }

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.register::<Shapes>();
        registry.register::<Labels>();
        registry
    }

    #[test]
    fn containers_use_fixed_tags() {
        let registry = registry();
        let provider = LiveReflection::new(&registry);
        let value = Shapes {
            grid: [1, 2, 3],
            names: BTreeSet::from(["b".into(), "a".into()]),
            lookup: BTreeMap::from([(7, true)]),
        };

        let node = to_node(&provider, &GraphConfig::default(), &value).unwrap();
        assert_eq!(node.name(), "data");

        let grid = node.child("grid").unwrap().as_children().unwrap();
        let grid: Vec<_> = grid.iter().map(|n| (n.name(), n.as_text().unwrap())).collect();
        assert_eq!(grid, [("value", "1"), ("value", "2"), ("value", "3")]);

        let names = node.child("names").unwrap().as_children().unwrap();
        assert_eq!(names[0].as_text(), Some("a"));
        assert_eq!(names[1].as_text(), Some("b"));

        let lookup = node.child("lookup").unwrap();
        assert_eq!(
            lookup,
            &Node::children(
                "lookup",
                vec![Node::children(
                    "entry",
                    vec![Node::text("key", "7"), Node::text("value", "true")],
                )],
            )
        );
    }

    #[test]
    fn null_required_field_fails() {
        let registry = registry();
        let provider = LiveReflection::new(&registry);
        let value = Labels::default();

        let err = to_node(&provider, &GraphConfig::default(), &value).unwrap_err();
        assert!(matches!(err, GraphError::RequiredField { field: "title", .. }));
    }

    #[test]
    fn null_optional_field_is_a_null_leaf() {
        let registry = registry();
        let provider = LiveReflection::new(&registry);
        let value = Labels {
            title: Some("x".into()),
            subtitle: None,
        };

        let node = to_node(&provider, &GraphConfig::default(), &value).unwrap();
        assert_eq!(node.child("title").unwrap().as_text(), Some("x"));
        assert!(node.child("subtitle").unwrap().is_null());
    }

    #[test]
    fn unregistered_type_is_unsupported() {
        let registry = TypeRegistry::empty();
        let provider = LiveReflection::new(&registry);

        let err = to_node(&provider, &GraphConfig::default(), &1_u64).unwrap_err();
        assert!(matches!(err, GraphError::UnsupportedType(_)));
    }
}
