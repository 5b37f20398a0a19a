//! Object-graph serialization driven by reflection.
//!
//! - [`reflect`]: type descriptors, the type registry, collection adapters
//!   and the live and AOT reflection providers.
//! - [`graph`]: the named-node wire tree, its serializer and deserializer.
//!
//! # Examples
//!
//! ```
//! use vc_serial::graph::GraphConfig;
//! use vc_serial::reflect::Reflect;
//! use vc_serial::reflect::provider::LiveReflection;
//! use vc_serial::reflect::registry::TypeRegistry;
//!
//! #[derive(Reflect, Default, Debug, PartialEq)]
//! #[reflect(default)]
//! struct Settings {
//!     volume: u8,
//!     name: String,
//! }
//!
//! let mut registry = TypeRegistry::new();
//! registry.register::<Settings>();
//! let provider = LiveReflection::new(&registry);
//! let config = GraphConfig::default();
//!
//! let settings = Settings { volume: 7, name: "main".into() };
//! let text = vc_serial::graph::to_string(&provider, &config, &settings).unwrap();
//! assert_eq!(text, r#"{"data":{"volume":"7","name":"main"}}"#);
//!
//! let back: Settings = vc_serial::graph::from_str_as(&provider, &config, &text).unwrap();
//! assert_eq!(back, settings);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use vc_graph as graph;
pub use vc_reflect as reflect;
