//! The node tree over JSON text.
//!
//! A node is an object with a single key, its name:
//!
//! ```text
//! {"data":{"int_value":"9","list_values":{"value":"a","value":"b"}}}
//! ```
//!
//! Keys repeat inside containers, so the output is read back by this
//! module (or any reader that keeps duplicate keys in order), not by a
//! generic JSON-to-map decoder. On input, JSON arrays, numbers and booleans
//! are accepted as `value` children and text leaves.

use std::io;

use vc_reflect::Reflect;
use vc_reflect::info::Type;
use vc_reflect::provider::ReflectionProvider;

use crate::{GraphConfig, GraphError, Node, from_node, from_node_as, to_node};

/// Serializes `value` as compact JSON.
pub fn to_string<P: ReflectionProvider + ?Sized>(
    provider: &P,
    config: &GraphConfig,
    value: &dyn Reflect,
) -> Result<String, GraphError> {
    let node = to_node(provider, config, value)?;
    Ok(serde_json::to_string(&node)?)
}

/// Serializes `value` as indented JSON.
pub fn to_string_pretty<P: ReflectionProvider + ?Sized>(
    provider: &P,
    config: &GraphConfig,
    value: &dyn Reflect,
) -> Result<String, GraphError> {
    let node = to_node(provider, config, value)?;
    Ok(serde_json::to_string_pretty(&node)?)
}

/// Serializes `value` into `writer`.
///
/// The writer is consumed and dropped on every path, so a file is closed
/// whether the call succeeds or not.
pub fn to_writer<P: ReflectionProvider + ?Sized, W: io::Write>(
    provider: &P,
    config: &GraphConfig,
    value: &dyn Reflect,
    writer: W,
) -> Result<(), GraphError> {
    let node = to_node(provider, config, value)?;
    serde_json::to_writer(writer, &node)?;
    Ok(())
}

pub fn from_str<P: ReflectionProvider + ?Sized>(
    provider: &P,
    config: &GraphConfig,
    text: &str,
    ty: Type,
) -> Result<Box<dyn Reflect>, GraphError> {
    let node: Node = serde_json::from_str(text)?;
    from_node(provider, config, &node, ty)
}

pub fn from_str_as<T: Reflect, P: ReflectionProvider + ?Sized>(
    provider: &P,
    config: &GraphConfig,
    text: &str,
) -> Result<T, GraphError> {
    let node: Node = serde_json::from_str(text)?;
    from_node_as(provider, config, &node)
}

/// Reads a value from `reader`; the reader is dropped on every path.
pub fn from_reader<P: ReflectionProvider + ?Sized, R: io::Read>(
    provider: &P,
    config: &GraphConfig,
    reader: R,
    ty: Type,
) -> Result<Box<dyn Reflect>, GraphError> {
    let node: Node = serde_json::from_reader(reader)?;
    from_node(provider, config, &node, ty)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use vc_reflect::Reflect;
    use vc_reflect::info::Type;
    use vc_reflect::provider::LiveReflection;
    use vc_reflect::registry::TypeRegistry;

    use super::{from_reader, from_str_as, to_string, to_writer};
    use crate::{GraphConfig, GraphError};

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(default)]
    struct Sample {
        int_value: i32,
        string_value: String,
        list_values: Vec<String>,
        map_values: BTreeMap<String, i32>,
    }

    fn sample() -> Sample {
        Sample {
            int_value: 9,
            string_value: "abc".into(),
            list_values: vec!["a".into(), "b".into()],
            map_values: BTreeMap::from([("k".into(), 1)]),
        }
    }

    #[test]
    fn text_shape() {
        let mut registry = TypeRegistry::new();
        registry.register::<Sample>();
        let provider = LiveReflection::new(&registry);

        let text = to_string(&provider, &GraphConfig::default(), &sample()).unwrap();
        assert_eq!(
            text,
            concat!(
                r#"{"data":{"int_value":"9","string_value":"abc","#,
                r#""list_values":{"value":"a","value":"b"},"#,
                r#""map_values":{"entry":{"key":"k","value":"1"}}}}"#,
            )
        );

        let back: Sample = from_str_as(&provider, &GraphConfig::default(), &text).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn streams() {
        let mut registry = TypeRegistry::new();
        registry.register::<Sample>();
        let provider = LiveReflection::new(&registry);

        let mut buffer = Vec::new();
        to_writer(&provider, &GraphConfig::default(), &sample(), &mut buffer).unwrap();

        let back = from_reader(&provider, &GraphConfig::default(), buffer.as_slice(), Type::of::<Sample>()).unwrap();
        assert_eq!(back.take::<Sample>().ok(), Some(sample()));
    }

    #[test]
    fn native_json_is_accepted() {
        let mut registry = TypeRegistry::new();
        registry.register::<Sample>();
        let provider = LiveReflection::new(&registry);

        let text = r#"{"data":{"int_value":9,"list_values":["a","b"]}}"#;
        let back: Sample = from_str_as(&provider, &GraphConfig::default(), text).unwrap();
        assert_eq!(back.int_value, 9);
        assert_eq!(back.list_values, ["a", "b"]);
    }

    #[test]
    fn syntax_errors_surface() {
        let registry = TypeRegistry::new();
        let provider = LiveReflection::new(&registry);

        let err = from_str_as::<i32, _>(&provider, &GraphConfig::default(), "{").unwrap_err();
        assert!(matches!(err, GraphError::Json(_)));
    }
}
