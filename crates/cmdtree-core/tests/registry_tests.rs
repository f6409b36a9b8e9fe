#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use cmdtree_core::{
    CommandNode, CommandRegistry, ConfigError, InMemoryRegistry, Invocation, RegistryError,
};
use common::{counter, RecordingSender};

#[test]
fn test_registration_execute_passes_typed_label() {
    let registry = InMemoryRegistry::new();
    CommandNode::builder()
        .name("pay")
        .aliases(["p"])
        .namespace("economy")
        .usage("/<command> <player> <amount>")
        .min_args(2)
        .executor_fn(|_: &Invocation<'_>| true)
        .build(&registry)
        .unwrap();

    let sender = RecordingSender::console();
    let registration = registry.get("P").unwrap();
    assert!(registration.execute(&sender, "p", &[]));
    assert_eq!(sender.messages(), vec!["/p <player> <amount>".to_string()]);
}

#[test]
fn test_qualified_name_reaches_shadowed_command() {
    let registry = InMemoryRegistry::new();
    let (first_hits, first) = counter();
    let (second_hits, second) = counter();

    CommandNode::builder()
        .name("home")
        .namespace("essentials")
        .executor_fn(first)
        .build(&registry)
        .unwrap();
    CommandNode::builder()
        .name("home")
        .namespace("towns")
        .executor_fn(second)
        .build(&registry)
        .unwrap();

    let sender = RecordingSender::player("alice");
    registry.execute(&sender, "home", &[]).unwrap();
    registry.execute(&sender, "towns:home", &[]).unwrap();

    assert_eq!(first_hits.load(Ordering::SeqCst), 1);
    assert_eq!(second_hits.load(Ordering::SeqCst), 1);
    assert_eq!(
        registry.qualified_names(),
        vec!["essentials:home", "towns:home"]
    );
}

#[test]
fn test_duplicate_registration_fails_build() {
    let registry = InMemoryRegistry::new();
    let build = || {
        CommandNode::builder()
            .name("spawn")
            .namespace("core")
            .executor_fn(|_: &Invocation<'_>| true)
            .build(&registry)
    };

    build().unwrap();
    let err = build().unwrap_err();

    assert_eq!(
        err,
        ConfigError::Registration {
            label: "spawn".to_string(),
            source: RegistryError::Duplicate {
                qualified_name: "core:spawn".to_string()
            },
        }
    );
    assert_eq!(
        err.to_string(),
        "failed to register command 'spawn': command 'core:spawn' is already registered"
    );
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_registry_is_shareable_across_threads() {
    let registry = Arc::new(InMemoryRegistry::new());
    let (hits, handler) = counter();
    CommandNode::builder()
        .name("ping")
        .executor_fn(handler)
        .build(registry.as_ref())
        .unwrap();

    let threads: Vec<_> = (0..4)
        .map(|_| {
            let registry = registry.clone();
            std::thread::spawn(move || {
                let sender = RecordingSender::console();
                for _ in 0..25 {
                    assert_eq!(registry.execute(&sender, "ping", &[]), Some(true));
                }
            })
        })
        .collect();
    for handle in threads {
        handle.join().unwrap();
    }
    assert_eq!(hits.load(Ordering::SeqCst), 100);
}

#[test]
fn test_custom_registry_receives_registration() {
    struct Named(std::sync::Mutex<Vec<String>>);

    impl CommandRegistry for Named {
        fn register(
            &self,
            registration: cmdtree_core::Registration,
        ) -> Result<(), RegistryError> {
            self.0
                .lock()
                .unwrap()
                .push(registration.identity().qualified_name());
            Ok(())
        }
    }

    let registry = Named(std::sync::Mutex::new(Vec::new()));
    CommandNode::builder()
        .name("kit")
        .executor_fn(|_: &Invocation<'_>| true)
        .build(&registry)
        .unwrap();

    assert_eq!(*registry.0.lock().unwrap(), vec!["kit".to_string()]);
}

fn register_bare_ex(registry: &InMemoryRegistry) -> Result<(), ConfigError> {
    CommandNode::builder()
        .name("ex")
        .executor_fn(|inv: &Invocation<'_>| {
            inv.sender.send_message("bare ex");
            true
        })
        .build(registry)
        .map(|_| ())
}

fn register_plugin_example(registry: &InMemoryRegistry) -> Result<(), ConfigError> {
    CommandNode::builder()
        .name("example")
        .namespace("plugin")
        .aliases(["ex"])
        .executor_fn(|inv: &Invocation<'_>| {
            inv.sender.send_message("plugin example");
            true
        })
        .build(registry)
        .map(|_| ())
}

#[test]
fn test_alias_does_not_block_unnamespaced_root_in_either_order() {
    // GIVEN a bare root `ex` and a namespaced root aliased `ex`
    let bare_first = InMemoryRegistry::new();
    register_bare_ex(&bare_first).unwrap();
    register_plugin_example(&bare_first).unwrap();

    let alias_first = InMemoryRegistry::new();
    register_plugin_example(&alias_first).unwrap();
    register_bare_ex(&alias_first).unwrap();

    // THEN both orders accept both commands
    assert_eq!(bare_first.len(), 2);
    assert_eq!(alias_first.len(), 2);

    // AND `ex` resolves to the command whose qualified name it is
    for registry in [&bare_first, &alias_first] {
        let sender = RecordingSender::console();
        assert_eq!(registry.execute(&sender, "EX", &[]), Some(true));
        assert_eq!(sender.messages(), vec!["bare ex".to_string()]);
        assert_eq!(registry.get("ex").unwrap().namespace(), "");
        assert_eq!(registry.get("plugin:example").unwrap().label(), "example");
        assert_eq!(registry.get("example").unwrap().label(), "example");
    }
}

#[test]
fn test_unnamespaced_root_register_lookup_execute() {
    let registry = InMemoryRegistry::new();
    CommandNode::builder()
        .name("Spawn")
        .aliases(["sp"])
        .usage("/<command> [world]")
        .max_args(1)
        .executor_fn(|inv: &Invocation<'_>| {
            inv.sender.send_message(&format!("spawning {:?}", inv.args));
            true
        })
        .build(&registry)
        .unwrap();

    assert_eq!(registry.qualified_names(), vec!["Spawn"]);
    let registration = registry.get("spawn").unwrap();
    assert_eq!(registration.identity().qualified_name(), "Spawn");
    assert!(registry.get("SP").is_some());
    assert!(registry.get(":spawn").is_none());

    let sender = RecordingSender::player("alice");
    assert_eq!(registry.execute(&sender, "sp", &["nether"]), Some(true));
    assert_eq!(registry.execute(&sender, "sp", &["a", "b"]), Some(true));
    assert_eq!(
        sender.messages(),
        vec![
            r#"spawning ["nether"]"#.to_string(),
            "/sp [world]".to_string()
        ]
    );
}

#[test]
fn test_unnamespaced_duplicate_rejected() {
    let registry = InMemoryRegistry::new();
    register_bare_ex(&registry).unwrap();

    let err = CommandNode::builder()
        .name("EX")
        .executor_fn(|_: &Invocation<'_>| true)
        .build(&registry)
        .unwrap_err();

    assert!(matches!(
        err,
        ConfigError::Registration {
            source: RegistryError::Duplicate { .. },
            ..
        }
    ));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_short_name_never_overrides_qualified_name() {
    let registry = InMemoryRegistry::new();
    register_bare_ex(&registry).unwrap();
    CommandNode::builder()
        .name("ex")
        .namespace("other")
        .executor_fn(|_: &Invocation<'_>| true)
        .build(&registry)
        .unwrap();

    assert_eq!(registry.get("ex").unwrap().namespace(), "");
    assert_eq!(registry.get("other:ex").unwrap().namespace(), "other");
}
