use vc_reflect::info::{ClassInfo, ConstructorArgs, FieldInfo, Type, TypeInfo};
use vc_reflect::provider::ReflectionProvider;
use vc_reflect::{Reflect, ReflectError};

use crate::node::{ENTRY_TAG, KEY_TAG, Node, VALUE_TAG};
use crate::{GraphConfig, GraphError, UnknownFieldPolicy};

type Value = Box<dyn Reflect>;

// -----------------------------------------------------------------------------
// GraphDeserializer

/// Reads a node tree back into a value of a target type.
///
/// The tree carries no type names: every node is interpreted against the
/// type expected at its position, so the target type of the root drives the
/// whole walk.
///
/// Classes with a declared constructor have all their field nodes read
/// first, then are built in one call; the rest are built through the
/// zero-argument constructor and filled field by field. Either way the
/// post-deserialize hook runs once, after every field is set.
pub struct GraphDeserializer<'a, P: ReflectionProvider + ?Sized> {
    provider: &'a P,
    config: &'a GraphConfig,
}

impl<'a, P: ReflectionProvider + ?Sized> GraphDeserializer<'a, P> {
    #[inline]
    pub const fn new(provider: &'a P, config: &'a GraphConfig) -> Self {
        Self { provider, config }
    }

    /// Reads the root node as a `ty`.
    ///
    /// The root must carry the configured root tag and must not be null.
    pub fn deserialize(&self, node: &Node, ty: Type) -> Result<Value, GraphError> {
        log::debug!("deserializing <{}> as `{ty}`", node.name());
        if node.name() != self.config.root_tag() {
            return Err(GraphError::UnexpectedNode {
                expected: self.config.root_tag().into(),
                found: node.name().into(),
            });
        }
        self.read(node, ty, None)?.ok_or_else(|| GraphError::NullValue {
            name: node.name().into(),
            ty,
        })
    }

    /// Reads one node, `None` for a null node.
    ///
    /// `field` is the class field the node belongs to, if any; it is the
    /// source of container element types.
    fn read(&self, node: &Node, ty: Type, field: Option<&FieldInfo>) -> Result<Option<Value>, GraphError> {
        if node.is_null() {
            return Ok(None);
        }
        let info = self
            .provider
            .type_info(ty)
            .map_err(|_| GraphError::UnsupportedType(ty))?;

        let value = match info {
            TypeInfo::Primitive(info) => {
                let text = expect_text(node)?;
                info.parse(text).ok_or_else(|| parse_error(ty, text))?
            }
            TypeInfo::Enum(info) => {
                let text = expect_text(node)?;
                info.from_variant(text).ok_or_else(|| parse_error(ty, text))?
            }
            TypeInfo::Array(info) => {
                let element = info.element();
                let elements = expect_children(node)?
                    .iter()
                    .map(|child| self.read_element(child, element))
                    .collect::<Result<_, _>>()?;
                self.provider.new_array(ty, elements)?
            }
            TypeInfo::Collection(info) => {
                let adapter = self
                    .provider
                    .registry()
                    .adapter_for(ty)
                    .ok_or(ReflectError::NoAdapter(ty))?;
                let element = self.element_type(field, 0, info.element(), ty);
                let mut collection = adapter.new_instance();
                for child in expect_children(node)? {
                    let value = self.read_element(child, element)?;
                    adapter.add(collection.as_mut(), value)?;
                }
                collection
            }
            TypeInfo::Map(info) => {
                let adapter = self
                    .provider
                    .registry()
                    .map_adapter_for(ty)
                    .ok_or(ReflectError::NoAdapter(ty))?;
                let key_ty = self.element_type(field, 0, info.key(), ty);
                let value_ty = self.element_type(field, 1, info.value(), ty);
                let mut map = adapter.new_instance();
                for entry in expect_children(node)? {
                    let (key, value) = self.read_entry(entry, key_ty, value_ty)?;
                    adapter.insert(map.as_mut(), key, value)?;
                }
                map
            }
            TypeInfo::Class(info) => self.read_class(node, info)?,
            TypeInfo::Interface(_) => {
                let implementation = self
                    .provider
                    .registry()
                    .implementation_for(ty)
                    .ok_or(ReflectError::NoImplementation(ty))?;
                let concrete = implementation.concrete();
                let value = self.read(node, concrete, field)?.ok_or_else(|| GraphError::NullValue {
                    name: node.name().into(),
                    ty: concrete,
                })?;
                implementation.wrap(value)?
            }
        };
        Ok(Some(value))
    }

    /// The element type at `index` of a container: from the owning field
    /// when the provider can recover it, then from the container's own type
    /// info, and finally the container type itself.
    fn element_type(&self, field: Option<&FieldInfo>, index: usize, declared: Option<Type>, ty: Type) -> Type {
        field
            .and_then(|field| self.provider.element_type(field, index))
            .or(declared)
            .unwrap_or(ty)
    }

    fn read_element(&self, node: &Node, ty: Type) -> Result<Value, GraphError> {
        expect_name(node, VALUE_TAG)?;
        self.read(node, ty, None)?.ok_or_else(|| GraphError::NullValue {
            name: node.name().into(),
            ty,
        })
    }

    fn read_entry(&self, entry: &Node, key_ty: Type, value_ty: Type) -> Result<(Value, Value), GraphError> {
        expect_name(entry, ENTRY_TAG)?;
        let [key, value] = expect_children(entry)? else {
            return Err(GraphError::MalformedEntry);
        };
        if key.name() != KEY_TAG || value.name() != VALUE_TAG {
            return Err(GraphError::MalformedEntry);
        }
        let key = self.read(key, key_ty, None)?.ok_or_else(|| GraphError::NullValue {
            name: KEY_TAG.into(),
            ty: key_ty,
        })?;
        let value = self.read_element(value, value_ty)?;
        Ok((key, value))
    }

    fn read_class(&self, node: &Node, info: &ClassInfo) -> Result<Value, GraphError> {
        let mut instance = match info.constructor() {
            Some(_) => self.construct(node, info)?,
            None => {
                let mut instance = self.provider.new_instance(info.ty())?;
                for child in expect_children(node)? {
                    let Some(field) = self.resolve_field(info, child)? else {
                        continue;
                    };
                    let value = self.read(child, field.ty(), Some(field))?;
                    self.assign(field, instance.as_mut(), value)?;
                }
                instance
            }
        };

        if self.provider.invoke_post_deserialize(instance.as_mut())? {
            log::trace!("ran post-deserialize hook of `{}`", info.ty());
        }
        Ok(instance)
    }

    /// Reads every field node, then calls the declared constructor with the
    /// values bound to its arguments and sets the remaining fields.
    fn construct(&self, node: &Node, info: &ClassInfo) -> Result<Value, GraphError> {
        let class = info.ty();
        let mut values: Vec<(&FieldInfo, Option<Value>)> = Vec::new();
        for child in expect_children(node)? {
            let Some(field) = self.resolve_field(info, child)? else {
                continue;
            };
            let value = self.read(child, field.ty(), Some(field))?;
            match values.iter_mut().find(|(known, _)| known.name() == field.name()) {
                Some(slot) => slot.1 = value,
                None => values.push((field, value)),
            }
        }

        let mut args = ConstructorArgs::new(class);
        if let Some(constructor) = info.constructor() {
            for arg in constructor.args() {
                let field = info
                    .field(arg.name())
                    .ok_or(ReflectError::UnboundArgument { class, name: arg.name() })?;
                let index = values.iter().position(|(known, _)| known.name() == arg.name());
                let value = index.and_then(|index| values.swap_remove(index).1);
                if value.is_none() && !field.is_nullable() {
                    return Err(GraphError::RequiredField {
                        class: field.declaring(),
                        field: field.name(),
                    });
                }
                args.push(arg.name(), value);
            }
        }

        let mut instance = self.provider.construct(class, args)?;
        for (field, value) in values {
            self.assign(field, instance.as_mut(), value)?;
        }
        Ok(instance)
    }

    /// Looks up the field a child node names.
    ///
    /// `None` when the name is unknown and the policy skips such nodes.
    fn resolve_field<'i>(&self, info: &'i ClassInfo, child: &Node) -> Result<Option<&'i FieldInfo>, GraphError> {
        if let Some(field) = info.field(child.name()) {
            log::trace!("reading `{}::{}`", field.declaring(), field.name());
            return Ok(Some(field));
        }
        match self.config.unknown_fields() {
            UnknownFieldPolicy::Reject => Err(GraphError::UnknownField {
                class: info.ty(),
                field: child.name().into(),
            }),
            UnknownFieldPolicy::Skip => {
                log::warn!("skipping unknown field <{}> of `{}`", child.name(), info.ty());
                Ok(None)
            }
        }
    }

    fn assign(&self, field: &FieldInfo, instance: &mut dyn Reflect, value: Option<Value>) -> Result<(), GraphError> {
        if value.is_none() && !field.is_nullable() {
            return Err(GraphError::RequiredField {
                class: field.declaring(),
                field: field.name(),
            });
        }
        self.provider.set(field, instance, value)?;
        Ok(())
    }
}

/// Reads `node` as a `ty`, see [`GraphDeserializer`].
#[inline]
pub fn from_node<P: ReflectionProvider + ?Sized>(
    provider: &P,
    config: &GraphConfig,
    node: &Node,
    ty: Type,
) -> Result<Value, GraphError> {
    GraphDeserializer::new(provider, config).deserialize(node, ty)
}

/// Reads `node` as a `T`.
pub fn from_node_as<T: Reflect, P: ReflectionProvider + ?Sized>(
    provider: &P,
    config: &GraphConfig,
    node: &Node,
) -> Result<T, GraphError> {
    let expected = Type::of::<T>();
    from_node(provider, config, node, expected)?
        .take::<T>()
        .map_err(|value| {
            GraphError::Reflection(ReflectError::WrongType {
                expected,
                actual: value.reflect_type(),
            })
        })
}

// -----------------------------------------------------------------------------
// Node helpers

fn expect_text(node: &Node) -> Result<&str, GraphError> {
    node.as_text().ok_or_else(|| unexpected_content(node, "text"))
}

fn expect_children(node: &Node) -> Result<&[Node], GraphError> {
    node.as_children().ok_or_else(|| unexpected_content(node, "child nodes"))
}

fn expect_name(node: &Node, name: &str) -> Result<(), GraphError> {
    if node.name() == name {
        return Ok(());
    }
    Err(GraphError::UnexpectedNode {
        expected: name.into(),
        found: node.name().into(),
    })
}

fn unexpected_content(node: &Node, expected: &'static str) -> GraphError {
    GraphError::UnexpectedContent {
        name: node.name().into(),
        expected,
        found: node.content().describe(),
    }
}

fn parse_error(ty: Type, text: &str) -> GraphError {
    GraphError::Parse { ty, text: text.into() }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use vc_reflect::info::Type;
    use vc_reflect::provider::LiveReflection;
    use vc_reflect::registry::TypeRegistry;
    use vc_reflect::Reflect;

    use super::{from_node, from_node_as};
    use crate::{GraphConfig, GraphError, Node};

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(default)]
    struct Stats {
        level: u8,
        ratio: f32,
        #[reflect(optional)]
        alias: Option<String>,
        scores: BTreeMap<String, i64>,
    }

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.register::<Stats>();
        registry
    }

    fn stats_node(extra: Vec<Node>) -> Node {
        let mut children = vec![
            Node::text("level", "3"),
            Node::text("ratio", "0.5"),
            Node::children(
                "scores",
                vec![Node::children(
                    "entry",
                    vec![Node::text("key", "k"), Node::text("value", "-4")],
                )],
            ),
        ];
        children.extend(extra);
        Node::children("data", children)
    }

    #[test]
    fn absent_fields_keep_their_default() {
        let registry = registry();
        let provider = LiveReflection::new(&registry);

        let stats: Stats = from_node_as(&provider, &GraphConfig::default(), &stats_node(vec![])).unwrap();
        assert_eq!(
            stats,
            Stats {
                level: 3,
                ratio: 0.5,
                alias: None,
                scores: BTreeMap::from([("k".into(), -4)]),
            }
        );
    }

    #[test]
    fn root_tag_is_checked() {
        let registry = registry();
        let provider = LiveReflection::new(&registry);
        let node = Node::children("save", vec![]);

        let err = from_node(&provider, &GraphConfig::default(), &node, Type::of::<Stats>()).unwrap_err();
        assert!(matches!(err, GraphError::UnexpectedNode { .. }));

        let config = GraphConfig::new().with_root_tag("save");
        assert!(from_node(&provider, &config, &node, Type::of::<Stats>()).is_ok());
    }

    #[test]
    fn bad_text_is_a_parse_error() {
        let registry = registry();
        let provider = LiveReflection::new(&registry);
        let node = Node::children("data", vec![Node::text("level", "300")]);

        let err = from_node(&provider, &GraphConfig::default(), &node, Type::of::<Stats>()).unwrap_err();
        assert!(matches!(err, GraphError::Parse { text, .. } if text == "300"));
    }

    #[test]
    fn null_into_plain_field_is_required() {
        let registry = registry();
        let provider = LiveReflection::new(&registry);
        let node = Node::children("data", vec![Node::null("level")]);

        let err = from_node(&provider, &GraphConfig::default(), &node, Type::of::<Stats>()).unwrap_err();
        assert!(matches!(err, GraphError::RequiredField { field: "level", .. }));
    }

    #[test]
    fn malformed_entry() {
        let registry = registry();
        let provider = LiveReflection::new(&registry);
        let node = Node::children(
            "data",
            vec![Node::children("scores", vec![Node::children("entry", vec![Node::text("key", "k")])])],
        );

        let err = from_node(&provider, &GraphConfig::default(), &node, Type::of::<Stats>()).unwrap_err();
        assert!(matches!(err, GraphError::MalformedEntry));
    }

    #[test]
    fn leaf_where_children_expected() {
        let registry = registry();
        let provider = LiveReflection::new(&registry);
        let node = Node::children("data", vec![Node::text("scores", "x")]);

        let err = from_node(&provider, &GraphConfig::default(), &node, Type::of::<Stats>()).unwrap_err();
        assert!(matches!(
            err,
            GraphError::UnexpectedContent {
                expected: "child nodes",
                found: "text",
                ..
            }
        ));
    }

    #[test]
    fn wrong_target_type() {
        let registry = registry();
        let provider = LiveReflection::new(&registry);
        let node = Node::text("data", "7");

        let value: u8 = from_node_as(&provider, &GraphConfig::default(), &node).unwrap();
        assert_eq!(value, 7);

        let err = from_node_as::<Stats, _>(&provider, &GraphConfig::default(), &node).unwrap_err();
        assert!(matches!(err, GraphError::UnexpectedContent { found: "text", .. }));

        let value = from_node(&provider, &GraphConfig::default(), &node, Type::of::<u8>()).unwrap();
        assert!(value.take::<u16>().is_err());
    }
}
