use std::{sync::Arc, vec};

use crate::{
    errors::ArgError,
    types::{DynError, Injectable, Instance, TypeInfo},
};

/// A class the container can build.
///
/// The constructor receives its dependencies as positional [`Args`] in the
/// order the resolved dependency list produced them.
pub trait Construct: Injectable + Sized {
    /// Constructs a new instance from the supplied arguments
    fn construct(args: Args) -> Result<Self, DynError>;

    /// The dependency list the class itself declares under `name`.
    ///
    /// The container queries this with its current dependencies property
    /// name whenever neither explicit nor configured dependencies exist.
    /// Returns `None` for every name the class does not answer to, which
    /// is what the default does.
    fn get_dependencies(name: &str) -> Option<Vec<Dependency>> {
        let _ = name;
        None
    }
}

/// Erased handle to a class.
///
/// Holds the class identity next to monomorphized shims for its
/// constructor and declared dependencies, so handles are plain copyable
/// values and classes need no registration step.
#[derive(Clone, Copy)]
pub struct Constructor {
    info: TypeInfo,
    construct: fn(Args) -> Result<Instance, DynError>,
    declared: fn(&str) -> Option<Vec<Dependency>>,
}

impl Constructor {
    /// The handle for class `T`
    pub fn of<T: Construct>() -> Constructor {
        Constructor {
            info: TypeInfo::of::<T>(),
            construct: |args| T::construct(args).map(Instance::new),
            declared: T::get_dependencies,
        }
    }

    pub fn type_info(&self) -> TypeInfo {
        self.info
    }

    pub fn type_name(&self) -> &'static str {
        self.info.type_name
    }

    pub(crate) fn construct(&self, args: Args) -> Result<Instance, DynError> {
        (self.construct)(args)
    }

    pub(crate) fn declared_dependencies(&self, name: &str) -> Option<Vec<Dependency>> {
        (self.declared)(name)
    }
}

impl std::fmt::Debug for Constructor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Constructor").field(&self.info.type_name).finish()
    }
}

/// One item of a dependency list
#[derive(Clone, Debug)]
pub enum Dependency {
    /// Resolved to the shared instance of the class
    Class(Constructor),
    /// Passed to the constructor unchanged
    Value(Instance),
}

impl Dependency {
    /// A class item for `T`
    pub fn class<T: Construct>() -> Dependency {
        Dependency::Class(Constructor::of::<T>())
    }

    /// A literal item wrapping `value`
    pub fn value<T: Injectable>(value: T) -> Dependency {
        Dependency::Value(Instance::value(value))
    }
}

/// The positional arguments handed to [`Construct::construct`].
///
/// Arguments are taken front to back, either typed through
/// [`Args::shared`] / [`Args::value`] or erased by iterating.
pub struct Args {
    class: TypeInfo,
    items: vec::IntoIter<Instance>,
    /// Position of the next argument, for diagnostics
    position: usize,
    total: usize,
}

impl Args {
    pub(crate) fn new(class: TypeInfo, items: Vec<Instance>) -> Args {
        Args {
            class,
            position: 0,
            total: items.len(),
            items: items.into_iter(),
        }
    }

    /// Number of arguments not yet taken
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.len() == 0
    }

    /// Takes the next argument as a shared handle to a `T`
    pub fn shared<T: Injectable>(&mut self) -> Result<Arc<T>, ArgError> {
        let position = self.position;
        let instance = self.take(position)?;
        instance
            .downcast()
            .map_err(|actual_type| ArgError::Mismatch {
                class: self.class.type_name,
                position,
                required_type: std::any::type_name::<T>(),
                actual_type,
            })
    }

    /// Takes the next argument as an owned `T`, cloning out of the shared handle
    pub fn value<T: Injectable + Clone>(&mut self) -> Result<T, ArgError> {
        self.shared::<T>().map(|value| (*value).clone())
    }

    fn take(&mut self, position: usize) -> Result<Instance, ArgError> {
        match self.items.next() {
            Some(instance) => {
                self.position += 1;
                Ok(instance)
            }
            None => Err(ArgError::Missing {
                class: self.class.type_name,
                position,
                supplied: self.total,
            }),
        }
    }
}

impl Iterator for Args {
    type Item = Instance;

    fn next(&mut self) -> Option<Instance> {
        let next = self.items.next();
        if next.is_some() {
            self.position += 1;
        }
        next
    }
}
