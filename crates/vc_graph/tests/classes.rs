use vc_graph::{GraphConfig, GraphError, Node, UnknownFieldPolicy};
use vc_reflect::info::Type;
use vc_reflect::provider::{LiveReflection, ReflectionProvider};
use vc_reflect::registry::TypeRegistry;
use vc_reflect::{Reflect, ReflectError, impl_reflect_interface};

// -----------------------------------------------------------------------------
// Fixtures

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
struct Contact {
    name: Option<String>,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
struct LooseContact {
    #[reflect(optional)]
    name: Option<String>,
    age: u8,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default, post_deserialize = Self::rebuild)]
struct Counter {
    values: Vec<u32>,
    #[reflect(skip)]
    total: u32,
    #[reflect(skip)]
    hook_runs: u32,
}

impl Counter {
    fn rebuild(&mut self) {
        self.total = self.values.iter().sum();
        self.hook_runs += 1;
    }
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
struct Entity {
    id: u64,
    name: String,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
struct Monster {
    #[reflect(extends)]
    entity: Entity,
    health: i32,
}

#[derive(Reflect, Default, Debug)]
#[reflect(default, post_deserialize = Self::rebuild)]
struct Tracked {
    #[reflect(extends)]
    counter: Counter,
    label: String,
    #[reflect(skip)]
    counter_total_seen: u32,
    #[reflect(skip)]
    hook_runs: u32,
}

impl Tracked {
    fn rebuild(&mut self) {
        self.counter_total_seen = self.counter.total;
        self.hook_runs += 1;
    }
}

trait Shape: Reflect {
    fn area(&self) -> f64;
}

impl_reflect_interface!(dyn Shape);

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
struct Square {
    side: f64,
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }
}

#[derive(Reflect)]
#[reflect(default)]
struct Scene {
    title: String,
    shapes: Vec<Box<dyn Shape>>,
    focus: Box<dyn Shape>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            title: String::new(),
            shapes: Vec::new(),
            focus: Box::new(Square::default()),
        }
    }
}

#[derive(Reflect, Debug, PartialEq)]
#[reflect(constructor = Self::new, args(text, hint))]
struct Label {
    text: String,
    #[reflect(optional)]
    hint: Option<String>,
    size: u16,
}

impl Label {
    fn new(text: String, hint: Option<String>) -> Self {
        Self { text, hint, size: 12 }
    }
}

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register::<Contact>();
    registry.register::<LooseContact>();
    registry.register::<Counter>();
    registry.register::<Monster>();
    registry.register::<Tracked>();
    registry.register::<Scene>();
    registry.register::<Label>();
    registry.register_implementation::<Box<dyn Shape>, Square>(|square| Box::new(square));
    registry
}

// -----------------------------------------------------------------------------
// Tests

#[test]
fn required_field_rejects_null_optional_field_allows_it() {
    let registry = registry();
    let provider = LiveReflection::new(&registry);
    let config = GraphConfig::default();

    let err = vc_graph::to_node(&provider, &config, &Contact::default()).unwrap_err();
    assert!(matches!(
        err,
        GraphError::RequiredField { class, field: "name" } if class == Type::of::<Contact>()
    ));

    let loose = LooseContact { name: None, age: 4 };
    let node = vc_graph::to_node(&provider, &config, &loose).unwrap();
    assert!(node.child("name").unwrap().is_null());

    let back: LooseContact = vc_graph::from_node_as(&provider, &config, &node).unwrap();
    assert_eq!(back, loose);
}

#[test]
fn post_deserialize_runs_once() {
    let registry = registry();
    let provider = LiveReflection::new(&registry);
    let config = GraphConfig::default();

    let counter = Counter {
        values: vec![1, 2, 3],
        ..Counter::default()
    };
    let node = vc_graph::to_node(&provider, &config, &counter).unwrap();
    assert_eq!(counter.hook_runs, 0);
    assert!(node.child("total").is_none());

    let back: Counter = vc_graph::from_node_as(&provider, &config, &node).unwrap();
    assert_eq!(back.hook_runs, 1);
    assert_eq!(back.total, 6);
}

#[test]
fn base_and_subclass_hooks_each_run_once() {
    let registry = registry();
    let provider = LiveReflection::new(&registry);
    let config = GraphConfig::default();

    let tracked = Tracked {
        counter: Counter {
            values: vec![4, 5],
            ..Counter::default()
        },
        label: "t".into(),
        ..Tracked::default()
    };
    let node = vc_graph::to_node(&provider, &config, &tracked).unwrap();

    let back: Tracked = vc_graph::from_node_as(&provider, &config, &node).unwrap();
    assert_eq!(back.counter.hook_runs, 1);
    assert_eq!(back.counter.total, 9);
    assert_eq!(back.hook_runs, 1);
    assert_eq!(back.counter_total_seen, 9);
}

#[test]
fn constructor_bound_fields_cannot_be_set() {
    let registry = registry();
    let provider = LiveReflection::new(&registry);
    let class = provider.class_info(Type::of::<Label>()).unwrap();

    let text = class.field("text").unwrap();
    assert!(text.is_final());
    assert!(!class.field("size").unwrap().is_final());

    let mut label = Label::new("a".into(), None);
    let err = provider
        .set(text, &mut label, Some(String::from("b").into_boxed_reflect()))
        .unwrap_err();
    assert!(matches!(err, ReflectError::FinalField { field: "text", .. }));
    assert_eq!(label.text, "a");
}

#[test]
fn superclass_fields_come_first() {
    let registry = registry();
    let provider = LiveReflection::new(&registry);
    let config = GraphConfig::default();

    let monster = Monster {
        entity: Entity {
            id: 42,
            name: "orc".into(),
        },
        health: -3,
    };
    let node = vc_graph::to_node(&provider, &config, &monster).unwrap();
    let names: Vec<&str> = node.as_children().unwrap().iter().map(Node::name).collect();
    assert_eq!(names, ["id", "name", "health"]);

    let back: Monster = vc_graph::from_node_as(&provider, &config, &node).unwrap();
    assert_eq!(back, monster);
}

#[test]
fn interface_fields_use_the_registered_implementation() {
    let registry = registry();
    let provider = LiveReflection::new(&registry);
    let config = GraphConfig::default();

    let scene = Scene {
        title: "yard".into(),
        shapes: vec![Box::new(Square { side: 2.0 }), Box::new(Square { side: 0.5 })],
        focus: Box::new(Square { side: 3.0 }),
    };
    let node = vc_graph::to_node(&provider, &config, &scene).unwrap();
    assert_eq!(
        node.child("focus").unwrap(),
        &Node::children("focus", vec![Node::text("side", "3")])
    );

    let back: Scene = vc_graph::from_node_as(&provider, &config, &node).unwrap();
    assert_eq!(back.title, "yard");
    assert_eq!(back.focus.area(), 9.0);
    let areas: Vec<f64> = back.shapes.iter().map(|shape| shape.area()).collect();
    assert_eq!(areas, [4.0, 0.25]);
    assert!(back.focus.resolve().is::<Square>());
}

#[test]
fn interface_without_implementation() {
    let mut registry = TypeRegistry::new();
    registry.register::<Scene>();
    let provider = LiveReflection::new(&registry);
    let config = GraphConfig::default();

    let node = Node::children(
        "data",
        vec![Node::children("focus", vec![Node::text("side", "1")])],
    );
    let err = vc_graph::from_node(&provider, &config, &node, Type::of::<Scene>()).unwrap_err();
    assert!(matches!(err, GraphError::Reflection(ReflectError::NoImplementation(_))));
}

#[test]
fn constructor_arguments() {
    let registry = registry();
    let provider = LiveReflection::new(&registry);
    let config = GraphConfig::default();

    let label = Label {
        text: "ok".into(),
        hint: Some("press".into()),
        size: 20,
    };
    let node = vc_graph::to_node(&provider, &config, &label).unwrap();
    let back: Label = vc_graph::from_node_as(&provider, &config, &node).unwrap();
    assert_eq!(back, label);

    let partial = Node::children("data", vec![Node::text("text", "ok")]);
    let back: Label = vc_graph::from_node_as(&provider, &config, &partial).unwrap();
    assert_eq!(
        back,
        Label {
            text: "ok".into(),
            hint: None,
            size: 12,
        }
    );

    let missing = Node::children("data", vec![Node::text("size", "9")]);
    let err = vc_graph::from_node(&provider, &config, &missing, Type::of::<Label>()).unwrap_err();
    assert!(matches!(err, GraphError::RequiredField { field: "text", .. }));
}

#[test]
fn unknown_fields() {
    let registry = registry();
    let provider = LiveReflection::new(&registry);
    let node = Node::children(
        "data",
        vec![
            Node::text("id", "1"),
            Node::text("name", "elf"),
            Node::text("mana", "10"),
            Node::text("health", "5"),
        ],
    );

    let err = vc_graph::from_node(&provider, &GraphConfig::default(), &node, Type::of::<Monster>()).unwrap_err();
    assert!(matches!(err, GraphError::UnknownField { field, .. } if field == "mana"));

    let lenient = GraphConfig::new().with_unknown_fields(UnknownFieldPolicy::Skip);
    let back: Monster = vc_graph::from_node_as(&provider, &lenient, &node).unwrap();
    assert_eq!(back.entity.name, "elf");
    assert_eq!(back.health, 5);
}
