//! Unit tests for class resolution.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rstest::{fixture, rstest};

use super::ComponentRegistry;
use crate::component::Component;
use crate::configurable::{Configurable, MutatorError};
use crate::value::{ParamValue, ValueKind};
use crate::WireError;

trait Named {
    fn name(&self) -> String;
}

trait Unrelated {}

#[derive(Debug, Default)]
struct Leaf {
    label: String,
}

impl Configurable for Leaf {
    fn accepts(&self, mutator: &str, kind: ValueKind) -> bool {
        mutator == "setLabel" && kind == ValueKind::Text
    }

    fn set(&mut self, mutator: &str, value: ParamValue) -> Result<(), MutatorError> {
        match value {
            ParamValue::Text(text) if mutator == "setLabel" => {
                self.label = text;
                Ok(())
            }
            other => Err(MutatorError::unsupported(mutator, &other)),
        }
    }
}

impl Component for Leaf {}

impl Named for Leaf {
    fn name(&self) -> String {
        format!("leaf:{}", self.label)
    }
}

struct Group {
    members: Vec<Box<dyn Named>>,
}

impl Configurable for Group {
    fn accepts(&self, _mutator: &str, _kind: ValueKind) -> bool {
        false
    }

    fn set(&mut self, mutator: &str, value: ParamValue) -> Result<(), MutatorError> {
        Err(MutatorError::unsupported(mutator, &value))
    }
}

impl Component for Group {}

impl Named for Group {
    fn name(&self) -> String {
        let names: Vec<String> = self.members.iter().map(|member| member.name()).collect();
        format!("group[{}]", names.join(","))
    }
}

#[fixture]
fn registry() -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    registry
        .register::<Leaf>("demo.Leaf")
        .provides::<dyn Named, _>(|leaf| leaf);
    registry
        .declare::<Group>("demo.Group")
        .provides::<dyn Named, _>(|group| group)
        .composite_of::<dyn Named, _>(|members| Group { members });
    registry
}

#[rstest]
fn resolves_registered_capability(registry: ComponentRegistry) {
    let mut resolved = registry
        .resolve::<dyn Named>("item", "demo.Leaf")
        .expect("leaf resolves");
    resolved
        .component_mut()
        .set("setLabel", ParamValue::Text("a".into()))
        .expect("label applies");
    let named = resolved.into_capability().expect("upcast succeeds");
    assert_eq!(named.name(), "leaf:a");
}

#[rstest]
fn concrete_type_is_always_provided(registry: ComponentRegistry) {
    let leaf = registry
        .resolve::<Leaf>("item", "demo.Leaf")
        .and_then(super::Resolved::into_capability)
        .expect("concrete type resolves");
    assert!(leaf.label.is_empty());
}

#[rstest]
fn factory_and_assembler_output_always_upcasts(registry: ComponentRegistry) {
    let leaf = registry
        .resolve::<dyn Component>("item", "demo.Leaf")
        .and_then(super::Resolved::into_capability)
        .expect("leaf upcasts to a component");
    assert!(leaf.accepts("setLabel", ValueKind::Text));

    let members: Vec<Box<dyn Named>> = vec![Box::new(Leaf::default())];
    let group = registry
        .resolve_composite::<Group, dyn Named>("group", "demo.Group", members)
        .and_then(super::Resolved::into_capability)
        .expect("group upcasts to its own type");
    assert_eq!(group.members.len(), 1);
}

#[rstest]
fn unknown_class_is_a_resolution_error(registry: ComponentRegistry) {
    match registry.resolve::<dyn Named>("item", "demo.Missing") {
        Err(WireError::Resolution { tag, class }) => {
            assert_eq!(tag, "item");
            assert_eq!(class, "demo.Missing");
        }
        other => panic!("expected resolution error, got {other:?}"),
    }
}

#[test]
fn type_constraint_is_checked_before_instantiation() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut registry = ComponentRegistry::new();
    registry.register_with("demo.Leaf", move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Leaf::default())
    });

    match registry.resolve::<dyn Unrelated>("item", "demo.Leaf") {
        Err(WireError::TypeConstraint { capability, .. }) => {
            assert!(capability.contains("Unrelated"), "capability was {capability}");
        }
        other => panic!("expected type constraint error, got {other:?}"),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    registry
        .resolve::<Leaf>("item", "demo.Leaf")
        .expect("leaf resolves");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn failing_factory_is_an_instantiation_error() {
    let mut registry = ComponentRegistry::new();
    registry.register_with::<Leaf, _>("demo.Leaf", || Err("no credentials".into()));
    match registry.resolve::<Leaf>("item", "demo.Leaf") {
        Err(WireError::Instantiation { source, .. }) => {
            let failure = source.expect("factory error is kept");
            assert_eq!(failure.to_string(), "no credentials");
        }
        other => panic!("expected instantiation error, got {other:?}"),
    }
}

#[rstest]
fn declared_only_classes_cannot_be_built_alone(registry: ComponentRegistry) {
    let err = registry
        .resolve::<dyn Named>("group", "demo.Group")
        .expect_err("no default construction path");
    assert!(
        matches!(err, WireError::Instantiation { source: None, .. }),
        "{err:?}"
    );
}

#[rstest]
fn assembles_composites_in_order(registry: ComponentRegistry) {
    let children: Vec<Box<dyn Named>> = ["a", "b", "c"]
        .into_iter()
        .map(|label| -> Box<dyn Named> {
            Box::new(Leaf {
                label: label.to_owned(),
            })
        })
        .collect();
    let group = registry
        .resolve_composite::<dyn Named, dyn Named>("group", "demo.Group", children)
        .and_then(super::Resolved::into_capability)
        .expect("group assembles");
    assert_eq!(group.name(), "group[leaf:a,leaf:b,leaf:c]");
}

#[rstest]
fn composite_needs_matching_child_capability(registry: ComponentRegistry) {
    let children: Vec<Box<Leaf>> = Vec::new();
    match registry.resolve_composite::<dyn Named, Leaf>("group", "demo.Group", children) {
        Err(WireError::IncompatibleCompositeConstructor {
            class,
            child_capability,
            ..
        }) => {
            assert_eq!(class, "demo.Group");
            assert!(child_capability.ends_with("Leaf"), "{child_capability}");
        }
        other => panic!("expected incompatible constructor, got {other:?}"),
    }
}

#[rstest]
fn describes_registrations(registry: ComponentRegistry) {
    assert_eq!(registry.classes().collect::<Vec<_>>(), ["demo.Leaf", "demo.Group"]);
    let group = registry.get("demo.Group").expect("group registered");
    assert!(!group.is_constructible());
    assert_eq!(group.capabilities().len(), 3);
    assert_eq!(group.composite_children().len(), 1);
    assert!(group.type_name().ends_with("Group"));
    assert!(format!("{group:?}").contains("constructible: false"));
}

#[test]
fn re_registering_replaces_the_entry() {
    let mut registry = ComponentRegistry::new();
    registry.declare::<Leaf>("demo.Leaf");
    registry.register::<Leaf>("demo.Leaf");
    assert_eq!(registry.classes().count(), 1);
    assert!(registry.get("demo.Leaf").is_some_and(super::Registration::is_constructible));
}

#[test]
fn registry_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ComponentRegistry>();
}
