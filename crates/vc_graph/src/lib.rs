//! Object-graph serialization over the `vc_reflect` type registry.
//!
//! A value is written as a tree of named [`Node`]s and read back against a
//! target [`Type`]:
//!
//! - a primitive or enum becomes a text leaf,
//! - an array or collection becomes a node of `value` children,
//! - a map becomes a node of `entry` children, each holding `key` and `value`,
//! - a class becomes a node with one child per field, named after the field.
//!
//! Every call receives its [`ReflectionProvider`] and [`GraphConfig`] by
//! reference, so one registry can serve any number of threads.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use vc_graph::GraphConfig;
//! use vc_reflect::Reflect;
//! use vc_reflect::provider::LiveReflection;
//! use vc_reflect::registry::TypeRegistry;
//!
//! #[derive(Reflect, Default, Debug, PartialEq)]
//! #[reflect(default)]
//! struct Sample {
//!     int_value: i32,
//!     list_values: Vec<String>,
//!     map_values: BTreeMap<String, i32>,
//! }
//!
//! let mut registry = TypeRegistry::new();
//! registry.register::<Sample>();
//! let provider = LiveReflection::new(&registry);
//! let config = GraphConfig::default();
//!
//! let sample = Sample {
//!     int_value: 9,
//!     list_values: vec!["a".into(), "b".into()],
//!     map_values: BTreeMap::from([("k".into(), 1)]),
//! };
//!
//! let node = vc_graph::to_node(&provider, &config, &sample).unwrap();
//! assert_eq!(node.child("int_value").unwrap().as_text(), Some("9"));
//!
//! let back: Sample = vc_graph::from_node_as(&provider, &config, &node).unwrap();
//! assert_eq!(back, sample);
//! ```
//!
//! [`Type`]: vc_reflect::info::Type
//! [`ReflectionProvider`]: vc_reflect::provider::ReflectionProvider

// -----------------------------------------------------------------------------
// Modules

mod config;
mod de;
mod error;
mod node;
mod ser;

#[cfg(feature = "json")]
mod json;

// -----------------------------------------------------------------------------
// Exports

pub use config::{GraphConfig, UnknownFieldPolicy};
pub use de::{GraphDeserializer, from_node, from_node_as};
pub use error::GraphError;
pub use node::{ENTRY_TAG, KEY_TAG, Node, NodeContent, VALUE_TAG};
pub use ser::{GraphSerializer, to_node};

#[cfg(feature = "json")]
pub use json::{from_reader, from_str, from_str_as, to_string, to_string_pretty, to_writer};
