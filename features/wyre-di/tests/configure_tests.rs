//! Configuration rules:
//! 1. dependency lists and implementation mappings are write-once
//! 2. a class is never both configured and an interface
//! 3. instantiation closes configuration for a class
//! 4. the dependencies property name changes at most once, before first use

use wyre_di::{Args, ConfigureError, Construct, Dependency, DiContainer, DynError};

struct Widget {
    label: String,
}

impl Construct for Widget {
    fn construct(mut args: Args) -> Result<Self, DynError> {
        let label = if args.is_empty() {
            "default".to_string()
        } else {
            args.value()?
        };
        Ok(Widget { label })
    }
}

struct Gadget;

impl Construct for Gadget {
    fn construct(_args: Args) -> Result<Self, DynError> {
        Ok(Gadget)
    }
}

struct Port;
struct Adapter;

impl Construct for Port {
    fn construct(_args: Args) -> Result<Self, DynError> {
        Ok(Port)
    }
}

impl Construct for Adapter {
    fn construct(_args: Args) -> Result<Self, DynError> {
        Ok(Adapter)
    }
}

struct Faulty;

impl Construct for Faulty {
    fn construct(_args: Args) -> Result<Self, DynError> {
        Err("refused to start".into())
    }
}

// Declares its own list under the default property name
struct SelfDeclared {
    label: String,
}

impl Construct for SelfDeclared {
    fn construct(mut args: Args) -> Result<Self, DynError> {
        let label = if args.is_empty() {
            "none".to_string()
        } else {
            args.value()?
        };
        Ok(SelfDeclared { label })
    }

    fn get_dependencies(name: &str) -> Option<Vec<Dependency>> {
        (name == "dependencies").then(|| vec![Dependency::value("declared".to_string())])
    }
}

// Declares its own list under a non-default property name only
struct Tagged {
    label: String,
}

impl Construct for Tagged {
    fn construct(mut args: Args) -> Result<Self, DynError> {
        let label = if args.is_empty() {
            "untagged".to_string()
        } else {
            args.value()?
        };
        Ok(Tagged { label })
    }

    fn get_dependencies(name: &str) -> Option<Vec<Dependency>> {
        (name == "requires").then(|| vec![Dependency::value("tagged".to_string())])
    }
}

#[test]
fn test_configure_is_write_once() {
    let mut di = DiContainer::new();
    di.configure::<Widget>(vec![Dependency::value("first".to_string())])
        .unwrap();

    let err = di
        .configure::<Widget>(vec![Dependency::value("second".to_string())])
        .unwrap_err();
    assert!(matches!(err, ConfigureError::AlreadyConfigured(_)));

    // The rejected list left the original in effect
    let widget = di.get::<Widget>().unwrap();
    assert_eq!(widget.downcast::<Widget>().unwrap().label, "first");
}

#[test]
fn test_an_interface_cannot_be_configured() {
    let mut di = DiContainer::new();
    di.set_implementation::<Port, Adapter>().unwrap();

    let err = di.configure::<Port>(vec![]).unwrap_err();
    assert!(matches!(err, ConfigureError::IsInterface(_)));
}

#[test]
fn test_a_configured_class_cannot_become_an_interface() {
    let mut di = DiContainer::new();
    di.configure::<Port>(vec![]).unwrap();

    let err = di.set_implementation::<Port, Adapter>().unwrap_err();
    assert!(matches!(err, ConfigureError::IsConfigured(_)));
}

#[test]
fn test_an_implementation_mapping_is_write_once() {
    let mut di = DiContainer::new();
    di.set_implementation::<Port, Adapter>().unwrap();

    let err = di.set_implementation::<Port, Gadget>().unwrap_err();
    assert!(matches!(err, ConfigureError::AlreadyImplemented(_)));
}

#[test]
fn test_configure_after_get_is_rejected() {
    let mut di = DiContainer::new();
    di.get::<Gadget>().unwrap();

    let err = di.configure::<Gadget>(vec![]).unwrap_err();
    assert!(matches!(err, ConfigureError::AlreadyInstantiated(_)));
}

#[test]
fn test_configure_after_create_is_rejected() {
    let mut di = DiContainer::new();
    di.create::<Gadget>(vec![]).unwrap();

    let err = di.configure::<Gadget>(vec![]).unwrap_err();
    assert!(matches!(err, ConfigureError::AlreadyInstantiated(_)));
}

#[test]
fn test_a_failed_construction_still_counts_as_first_use() {
    let mut di = DiContainer::new();
    di.get::<Faulty>().unwrap_err();

    let err = di.configure::<Faulty>(vec![]).unwrap_err();
    assert!(matches!(err, ConfigureError::AlreadyInstantiated(_)));
}

#[test]
fn test_clear_keeps_the_instantiation_record() {
    let mut di = DiContainer::new();
    di.get::<Gadget>().unwrap();
    di.clear();

    // Only the cache was dropped, the class still counts as used
    let err = di.configure::<Gadget>(vec![]).unwrap_err();
    assert!(matches!(err, ConfigureError::AlreadyInstantiated(_)));
}

#[test]
fn test_an_empty_configuration_is_write_once_but_falls_through() {
    let mut di = DiContainer::new();
    di.configure::<SelfDeclared>(vec![]).unwrap();

    let err = di.configure::<SelfDeclared>(vec![]).unwrap_err();
    assert!(matches!(err, ConfigureError::AlreadyConfigured(_)));

    // Reading skips the empty configured list and uses the declared one
    let instance = di.get::<SelfDeclared>().unwrap();
    assert_eq!(instance.downcast::<SelfDeclared>().unwrap().label, "declared");
}

#[test]
fn test_property_name_defaults_to_dependencies() {
    let di = DiContainer::new();
    assert_eq!(di.dependencies_property_name(), "dependencies");
}

#[test]
fn test_property_name_changes_at_most_once() {
    let mut di = DiContainer::new();
    di.set_dependencies_property_name("requires").unwrap();
    assert_eq!(di.dependencies_property_name(), "requires");

    let err = di.set_dependencies_property_name("needs").unwrap_err();
    assert!(matches!(err, ConfigureError::PropertyNameChanged));
    assert_eq!(di.dependencies_property_name(), "requires");
}

#[test]
fn test_setting_the_current_name_is_a_noop() {
    let mut di = DiContainer::new();
    di.set_dependencies_property_name("dependencies").unwrap();
    di.set_dependencies_property_name("dependencies").unwrap();

    // The no-ops above did not spend the one permitted change
    di.set_dependencies_property_name("requires").unwrap();
    di.set_dependencies_property_name("requires").unwrap();
    assert_eq!(di.dependencies_property_name(), "requires");
}

#[test]
fn test_property_name_is_frozen_by_instantiation() {
    let mut di = DiContainer::new();
    di.get::<Gadget>().unwrap();

    let err = di.set_dependencies_property_name("requires").unwrap_err();
    assert!(matches!(err, ConfigureError::PropertyNameFrozen));

    // A transient construction freezes it just the same
    let mut di = DiContainer::new();
    di.create::<Gadget>(vec![]).unwrap();

    let err = di.set_dependencies_property_name("requires").unwrap_err();
    assert!(matches!(err, ConfigureError::PropertyNameFrozen));
}

#[test]
fn test_renaming_switches_the_declared_lookup() {
    // Under the default name the class declares nothing
    let mut di = DiContainer::new();
    let instance = di.get::<Tagged>().unwrap();
    assert_eq!(instance.downcast::<Tagged>().unwrap().label, "untagged");

    // Under the renamed property its declared list is found
    let mut di = DiContainer::new();
    di.set_dependencies_property_name("requires").unwrap();
    let instance = di.get::<Tagged>().unwrap();
    assert_eq!(instance.downcast::<Tagged>().unwrap().label, "tagged");
}
