use core::fmt::{self, Formatter};

use serde_core::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_core::ser::{Serialize, SerializeMap, Serializer};

/// The name of every element node of an array or collection, and of the
/// value node of a map entry.
pub const VALUE_TAG: &str = "value";
/// The name of every node of a map.
pub const ENTRY_TAG: &str = "entry";
/// The name of the key node of a map entry.
pub const KEY_TAG: &str = "key";

pub(crate) const DEFAULT_ROOT_TAG: &str = "data";

// -----------------------------------------------------------------------------
// Node

/// One named node of the wire tree.
///
/// The tree carries no type information: the reader decides how to
/// interpret a node from the type it expects there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    content: NodeContent,
}

/// What a [`Node`] holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeContent {
    /// A null value. Distinct from empty text and from no children.
    Null,
    /// The text of a primitive or enum leaf.
    Text(String),
    /// Field nodes of a class, `value` nodes of a collection, `entry`
    /// nodes of a map.
    Children(Vec<Node>),
}

impl NodeContent {
    /// A short description, for error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Text(_) => "text",
            Self::Children(_) => "child nodes",
        }
    }
}

impl Node {
    #[inline]
    pub fn new(name: impl Into<String>, content: NodeContent) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    #[inline]
    pub fn null(name: impl Into<String>) -> Self {
        Self::new(name, NodeContent::Null)
    }

    #[inline]
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, NodeContent::Text(text.into()))
    }

    #[inline]
    pub fn children(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self::new(name, NodeContent::Children(children))
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn content(&self) -> &NodeContent {
        &self.content
    }

    #[inline]
    pub fn into_content(self) -> NodeContent {
        self.content
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self.content, NodeContent::Null)
    }

    /// The text of a leaf, `None` for other nodes.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            NodeContent::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The child nodes, `None` for leaves.
    #[inline]
    pub fn as_children(&self) -> Option<&[Node]> {
        match &self.content {
            NodeContent::Children(children) => Some(children),
            _ => None,
        }
    }

    /// The first child named `name`.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.as_children()?.iter().find(|child| child.name == name)
    }

    /// Mutable access to the child nodes, `None` for leaves.
    #[inline]
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match &mut self.content {
            NodeContent::Children(children) => Some(children),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Serialize
//
// A node is a single-entry map `{ name: content }`. Text is a string, null
// is unit, children are a map from child name to child content in order,
// keys may repeat.

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(Some(1))?;
        state.serialize_entry(&self.name, &self.content)?;
        state.end()
    }
}

impl Serialize for NodeContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Text(text) => serializer.serialize_str(text),
            Self::Children(children) => {
                let mut state = serializer.serialize_map(Some(children.len()))?;
                for child in children {
                    state.serialize_entry(&child.name, &child.content)?;
                }
                state.end()
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Deserialize
//
// Numbers and booleans read from the text syntax become text leaves, a
// sequence becomes `value` children.

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RootVisitor)
    }
}

impl<'de> Deserialize<'de> for NodeContent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ContentVisitor)
    }
}

struct RootVisitor;

impl<'de> Visitor<'de> for RootVisitor {
    type Value = Node;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a map with a single root node")
    }

    fn visit_map<V: MapAccess<'de>>(self, mut map: V) -> Result<Self::Value, V::Error> {
        let Some((name, content)) = map.next_entry::<String, NodeContent>()? else {
            return Err(de::Error::invalid_length(0, &self));
        };
        if map.next_key::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::custom("expected a single root node, found several"));
        }
        Ok(Node { name, content })
    }
}

struct ContentVisitor;

impl<'de> Visitor<'de> for ContentVisitor {
    type Value = NodeContent;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("null, a text leaf or child nodes")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(NodeContent::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(NodeContent::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        NodeContent::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(NodeContent::Text(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(NodeContent::Text(v.to_string()))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        Ok(NodeContent::Text(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(NodeContent::Text(v.to_string()))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(NodeContent::Text(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(NodeContent::Text(v.to_string()))
    }

    fn visit_char<E: de::Error>(self, v: char) -> Result<Self::Value, E> {
        Ok(NodeContent::Text(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(NodeContent::Text(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(NodeContent::Text(v))
    }

    fn visit_seq<V: SeqAccess<'de>>(self, mut seq: V) -> Result<Self::Value, V::Error> {
        let mut children = Vec::with_capacity(seq.size_hint().unwrap_or_default());
        while let Some(content) = seq.next_element::<NodeContent>()? {
            children.push(Node::new(VALUE_TAG, content));
        }
        Ok(NodeContent::Children(children))
    }

    fn visit_map<V: MapAccess<'de>>(self, mut map: V) -> Result<Self::Value, V::Error> {
        let mut children = Vec::with_capacity(map.size_hint().unwrap_or_default());
        while let Some((name, content)) = map.next_entry::<String, NodeContent>()? {
            children.push(Node { name, content });
        }
        Ok(NodeContent::Children(children))
    }
}

// -----------------------------------------------------------------------------
// Tests
