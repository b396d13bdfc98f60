use std::{
    any::TypeId,
    borrow::Cow,
    collections::{HashMap, HashSet},
    fmt::Debug,
};

use crate::{
    construct::{Args, Construct, Constructor, Dependency},
    errors::{ConfigureError, ResolveError},
    types::{Instance, TypeInfo},
};

/// The property name classes declare their own dependencies under,
/// unless changed through [`DiContainer::set_dependencies_property_name`]
const DEFAULT_DEPENDENCIES_PROPERTY: &str = "dependencies";

/// Registry resolving class constructors into instances.
///
/// A container holds three write-once registrations next to the cache of
/// shared instances:
/// - configured dependency lists, one per class
/// - interface to implementation redirects, one per interface
/// - the dependencies property name, changeable once
///
/// A class is never both configured and an interface, and configuration
/// closes once the class has been instantiated. Only the shared instance
/// cache can be reset, through [`DiContainer::clear`].
pub struct DiContainer {
    /// Write-once dependency lists, keyed by class
    configured: HashMap<TypeId, Vec<Dependency>>,
    /// Write-once interface to implementation redirects
    implementations: HashMap<TypeId, Constructor>,
    /// Shared instances, keyed by terminal class
    instances: HashMap<TypeId, Instance>,
    /// Classes that reached the instantiation primitive at least once
    instantiated: HashSet<TypeId>,
    dependencies_property: PropertyName,
}

impl Debug for DiContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_struct("DiContainer");
        for instance in self.instances.values() {
            map.field(instance.type_name(), &"shared");
        }
        map.finish()
    }
}

impl Default for DiContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl DiContainer {
    /// Creates an empty container
    pub fn new() -> Self {
        DiContainer {
            configured: HashMap::new(),
            implementations: HashMap::new(),
            instances: HashMap::new(),
            instantiated: HashSet::new(),
            dependencies_property: PropertyName::default(),
        }
    }

    /// Returns the shared instance of `T`, constructing and caching it on
    /// first use.
    ///
    /// Implementation redirects are followed first, so every class along
    /// one chain yields the same instance of the chain's terminal class.
    pub fn get<T: Construct>(&mut self) -> Result<Instance, ResolveError> {
        self.shared(Constructor::of::<T>())
    }

    /// Constructs a fresh instance of `T`, bypassing the shared cache.
    ///
    /// Every call yields an independent instance and none of them is ever
    /// cached. Class items in `deps` still resolve to shared instances.
    pub fn create<T: Construct>(
        &mut self,
        deps: Vec<Dependency>,
    ) -> Result<Instance, ResolveError> {
        self.instantiate(Constructor::of::<T>(), deps)
    }

    /// Stores the dependency list for class `T`.
    ///
    /// Each class can be configured once, and only while it has neither
    /// been declared an interface nor been instantiated. An empty list is
    /// stored like any other, it just never wins over the class's own
    /// declared dependencies.
    pub fn configure<T: Construct>(
        &mut self,
        deps: Vec<Dependency>,
    ) -> Result<&mut Self, ConfigureError> {
        let class = TypeInfo::of::<T>();

        if self.configured.contains_key(&class.type_id) {
            return Err(ConfigureError::AlreadyConfigured(class.type_name));
        }
        if self.implementations.contains_key(&class.type_id) {
            return Err(ConfigureError::IsInterface(class.type_name));
        }
        if self.instantiated.contains(&class.type_id) {
            return Err(ConfigureError::AlreadyInstantiated(class.type_name));
        }

        tracing::debug!(
            "Configured {} with {} dependency item(s)",
            class.type_name,
            deps.len()
        );
        self.configured.insert(class.type_id, deps);
        Ok(self)
    }

    /// Maps interface `I` to implementation `K`.
    ///
    /// Each interface can be mapped once, and only while it carries no
    /// configured dependency list. `K` may itself be mapped further,
    /// extending the chain; nothing validates that the chain terminates.
    ///
    /// Mapping an already instantiated class is allowed. Its cached
    /// instance stays in the cache but can no longer be reached through
    /// `I`, which now resolves along the chain.
    pub fn set_implementation<I: Construct, K: Construct>(
        &mut self,
    ) -> Result<&mut Self, ConfigureError> {
        let interface = TypeInfo::of::<I>();

        if self.implementations.contains_key(&interface.type_id) {
            return Err(ConfigureError::AlreadyImplemented(interface.type_name));
        }
        if self.configured.contains_key(&interface.type_id) {
            return Err(ConfigureError::IsConfigured(interface.type_name));
        }

        let implementation = Constructor::of::<K>();
        tracing::debug!(
            "Mapped {} to {}",
            interface.type_name,
            implementation.type_name()
        );
        self.implementations.insert(interface.type_id, implementation);
        Ok(self)
    }

    /// Drops every cached shared instance.
    ///
    /// Configured dependencies, implementation mappings and the record of
    /// past instantiations stay untouched.
    pub fn clear(&mut self) {
        tracing::debug!("Clearing {} cached instance(s)", self.instances.len());
        self.instances.clear();
    }

    /// The property name classes are queried for declared dependencies under
    pub fn dependencies_property_name(&self) -> &str {
        &self.dependencies_property.name
    }

    /// Changes the dependencies property name.
    ///
    /// Allowed exactly once, and only while nothing has been instantiated.
    /// Setting the current name again is a no-op and always succeeds.
    pub fn set_dependencies_property_name(
        &mut self,
        name: &str,
    ) -> Result<&mut Self, ConfigureError> {
        if name == self.dependencies_property.name {
            return Ok(self);
        }
        if self.dependencies_property.changed {
            return Err(ConfigureError::PropertyNameChanged);
        }
        if !self.instantiated.is_empty() {
            return Err(ConfigureError::PropertyNameFrozen);
        }

        tracing::debug!("Dependencies property name changed to '{name}'");
        self.dependencies_property = PropertyName {
            name: Cow::Owned(name.to_string()),
            changed: true,
        };
        Ok(self)
    }
}

// Resolution engine
impl DiContainer {
    /// Returns the shared instance for `requested`, filling the cache on a miss
    fn shared(&mut self, requested: Constructor) -> Result<Instance, ResolveError> {
        let terminal = self.chain_resolve(requested);
        if let Some(instance) = self.instances.get(&terminal.type_info().type_id) {
            return Ok(instance.clone());
        }

        let instance = self.instantiate(terminal, Vec::new())?;
        tracing::debug!("Caching shared instance of {}", terminal.type_name());
        self.instances
            .insert(terminal.type_info().type_id, instance.clone());
        Ok(instance)
    }

    /// Builds one instance of whatever `requested` resolves to.
    ///
    /// The dependency list is picked by priority: a non-empty `explicit`
    /// list wins, then a non-empty configured list, then a non-empty list
    /// the class declares itself. Every class item in the picked list is
    /// replaced by its shared instance before the constructor runs.
    fn instantiate(
        &mut self,
        requested: Constructor,
        explicit: Vec<Dependency>,
    ) -> Result<Instance, ResolveError> {
        let terminal = self.chain_resolve(requested);
        let deps = self.dependency_list(requested, terminal, explicit);

        let mut resolved = Vec::with_capacity(deps.len());
        for dep in deps {
            match dep {
                Dependency::Class(class) => resolved.push(self.shared(class)?),
                Dependency::Value(value) => resolved.push(value),
            }
        }

        // First use is recorded even when the constructor fails below
        self.instantiated.insert(terminal.type_info().type_id);

        tracing::debug!("Constructing instance of {}", terminal.type_name());
        terminal
            .construct(Args::new(terminal.type_info(), resolved))
            .map_err(|error| ResolveError::ConstructorFailed {
                class: terminal.type_name(),
                error,
            })
    }

    /// Picks the dependency list for `terminal`, skipping every empty tier
    fn dependency_list(
        &self,
        requested: Constructor,
        terminal: Constructor,
        explicit: Vec<Dependency>,
    ) -> Vec<Dependency> {
        if !explicit.is_empty() {
            return explicit;
        }

        if let Some(configured) = self.configured.get(&terminal.type_info().type_id) {
            if !configured.is_empty() {
                return configured.clone();
            }
        }

        let name = self.dependencies_property_name();
        if let Some(declared) = terminal.declared_dependencies(name) {
            if !declared.is_empty() {
                return declared;
            }
        }

        tracing::warn!(
            "No dependencies found for {} (resolved to {}), constructing with no arguments",
            requested.type_name(),
            terminal.type_name()
        );
        Vec::new()
    }

    /// Follows implementation redirects until a class without one is reached.
    ///
    /// A cyclic mapping makes this loop forever. The log below traps the
    /// case for diagnosis but does not alter it.
    fn chain_resolve(&self, requested: Constructor) -> Constructor {
        let mut current = requested;
        let mut hops = 0_usize;
        while let Some(next) = self.implementations.get(&current.type_info().type_id) {
            current = *next;
            hops += 1;
            if hops == self.implementations.len() + 1 {
                tracing::error!(
                    "Implementation chain from {} is longer than the whole map - the mapping is cyclic",
                    requested.type_name()
                );
            }
        }
        current
    }
}

/// The dependencies property name and whether its one change was spent
struct PropertyName {
    name: Cow<'static, str>,
    changed: bool,
}

impl Default for PropertyName {
    fn default() -> Self {
        PropertyName {
            name: Cow::Borrowed(DEFAULT_DEPENDENCIES_PROPERTY),
            changed: false,
        }
    }
}
