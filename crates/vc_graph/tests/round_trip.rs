use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use vc_graph::{GraphConfig, Node};
use vc_reflect::Reflect;
use vc_reflect::provider::LiveReflection;
use vc_reflect::registry::TypeRegistry;

#[derive(Reflect, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Mood {
    #[default]
    Calm,
    Angry,
}

#[derive(Reflect, Default, Debug, Clone, PartialEq)]
#[reflect(default)]
struct Inner {
    id: u32,
    label: String,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
struct Everything {
    flag: bool,
    byte: i8,
    letter: char,
    short: i16,
    int: i32,
    long: i64,
    float: f32,
    double: f64,
    text: String,
    boxed: Option<i32>,
    mood: Mood,
    inner: Inner,
    pair: [Inner; 2],
    bytes: Vec<u8>,
    slice: Box<[u16]>,
    list: Vec<Inner>,
    queue: VecDeque<String>,
    set: HashSet<i32>,
    ordered: BTreeSet<String>,
    map: HashMap<String, u32>,
    nested: BTreeMap<String, Vec<Mood>>,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
struct Sample {
    int_value: i32,
    string_value: String,
    list_values: Vec<String>,
    map_values: BTreeMap<String, i32>,
}

fn everything() -> Everything {
    Everything {
        flag: true,
        byte: -8,
        letter: 'q',
        short: 300,
        int: -70_000,
        long: 1 << 40,
        float: 0.25,
        double: -1.0e-9,
        text: "  spaced  ".into(),
        boxed: Some(5),
        mood: Mood::Angry,
        inner: Inner {
            id: 1,
            label: "one".into(),
        },
        pair: [
            Inner {
                id: 2,
                label: "two".into(),
            },
            Inner {
                id: 3,
                label: String::new(),
            },
        ],
        bytes: vec![0, 255, 7],
        slice: vec![1, 2].into_boxed_slice(),
        list: vec![Inner::default()],
        queue: VecDeque::from(["x".to_string(), "y".to_string()]),
        set: HashSet::from([3, 1, 2]),
        ordered: BTreeSet::from(["b".to_string(), "a".to_string()]),
        map: HashMap::from([("k".to_string(), 1), ("j".to_string(), 2)]),
        nested: BTreeMap::from([("moods".to_string(), vec![Mood::Calm, Mood::Angry])]),
    }
}

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register::<Everything>();
    registry
}

#[test]
fn every_shape_round_trips() {
    let registry = registry();
    let provider = LiveReflection::new(&registry);
    let config = GraphConfig::default();

    let node = vc_graph::to_node(&provider, &config, &everything()).unwrap();
    assert_eq!(node.child("mood").unwrap().as_text(), Some("Angry"));
    assert_eq!(node.child("flag").unwrap().as_text(), Some("true"));
    assert_eq!(node.child("text").unwrap().as_text(), Some("  spaced  "));

    let back: Everything = vc_graph::from_node_as(&provider, &config, &node).unwrap();
    assert_eq!(back, everything());
}

#[test]
fn round_trips_through_text_syntaxes() {
    let registry = registry();
    let provider = LiveReflection::new(&registry);
    let config = GraphConfig::default();

    let text = vc_graph::to_string_pretty(&provider, &config, &everything()).unwrap();
    let back: Everything = vc_graph::from_str_as(&provider, &config, &text).unwrap();
    assert_eq!(back, everything());

    let node = vc_graph::to_node(&provider, &config, &everything().inner).unwrap();
    let text = ron::to_string(&node).unwrap();
    let node: Node = ron::from_str(&text).unwrap();
    let back: Inner = vc_graph::from_node_as(&provider, &config, &node).unwrap();
    assert_eq!(back, everything().inner);
}

#[test]
fn empty_containers_are_not_null() {
    let registry = registry();
    let provider = LiveReflection::new(&registry);
    let config = GraphConfig::default();

    let value = Everything {
        boxed: Some(0),
        ..Everything::default()
    };
    let node = vc_graph::to_node(&provider, &config, &value).unwrap();
    assert_eq!(node.child("list").unwrap().as_children(), Some(&[][..]));

    let back: Everything = vc_graph::from_node_as(&provider, &config, &node).unwrap();
    assert!(back.list.is_empty());
    assert_eq!(back, value);
}

#[test]
fn example_sample() {
    let mut registry = TypeRegistry::new();
    registry.register::<Sample>();
    let provider = LiveReflection::new(&registry);
    let config = GraphConfig::default();

    let sample = Sample {
        int_value: 9,
        string_value: "abc".into(),
        list_values: vec!["a".into(), "b".into()],
        map_values: BTreeMap::from([("k".into(), 1)]),
    };

    let node = vc_graph::to_node(&provider, &config, &sample).unwrap();
    let expected = Node::children(
        "data",
        vec![
            Node::text("int_value", "9"),
            Node::text("string_value", "abc"),
            Node::children(
                "list_values",
                vec![Node::text("value", "a"), Node::text("value", "b")],
            ),
            Node::children(
                "map_values",
                vec![Node::children(
                    "entry",
                    vec![Node::text("key", "k"), Node::text("value", "1")],
                )],
            ),
        ],
    );
    assert_eq!(node, expected);

    let back: Sample = vc_graph::from_node_as(&provider, &config, &node).unwrap();
    assert_eq!(back, sample);
}
