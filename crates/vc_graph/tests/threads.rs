use std::collections::BTreeMap;
use std::thread;

use vc_graph::GraphConfig;
use vc_reflect::Reflect;
use vc_reflect::provider::LiveReflection;
use vc_reflect::registry::TypeRegistry;

#[derive(Reflect, Default, Debug, Clone, PartialEq)]
#[reflect(default)]
struct Save {
    slot: u32,
    flags: BTreeMap<String, bool>,
    history: Vec<i64>,
}

#[test]
fn one_registry_serves_many_threads() {
    let mut registry = TypeRegistry::new();
    registry.register::<Save>();
    let provider = LiveReflection::new(&registry);
    let config = GraphConfig::default();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8_u32)
            .map(|slot| {
                let (provider, config) = (&provider, &config);
                scope.spawn(move || {
                    let save = Save {
                        slot,
                        flags: BTreeMap::from([(format!("seen_{slot}"), slot % 2 == 0)]),
                        history: (0..i64::from(slot)).collect(),
                    };
                    for _ in 0..16 {
                        let text = vc_graph::to_string(provider, config, &save).unwrap();
                        let back: Save = vc_graph::from_str_as(provider, config, &text).unwrap();
                        assert_eq!(back, save);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    });
}
