//! Wyre DI is a process-local registry that resolves class constructors into
//! instances, shared or freshly built.
//!
//! Wyre DI is split into four major parts:
//! 1. DiContainer: the registry holding configured dependency lists,
//!    interface mappings and the shared instance cache
//! 2. Construct: the trait a class implements so the container can build it
//! 3. Dependency: one item of a dependency list, either a class reference
//!    or a literal value
//! 4. Args: the positional arguments handed to a constructor
//!
//! # Examples
//!
//! ```rust
//! use wyre_di::{Args, Construct, Dependency, DiContainer, DynError};
//!
//! struct Greeter {
//!     greeting: String,
//! }
//!
//! impl Construct for Greeter {
//!     fn construct(mut args: Args) -> Result<Self, DynError> {
//!         Ok(Greeter {
//!             greeting: args.value()?,
//!         })
//!     }
//! }
//!
//! fn main() -> Result<(), DynError> {
//!     let mut di = DiContainer::new();
//!     di.configure::<Greeter>(vec![Dependency::value("hello".to_string())])?;
//!
//!     // Shared: constructed once, cached, handed out again
//!     let greeter = di.get::<Greeter>()?.downcast::<Greeter>()?;
//!     assert_eq!(greeter.greeting, "hello");
//!
//!     // Fresh: explicit dependencies win over the configured ones
//!     let direct = di.create::<Greeter>(vec![Dependency::value("direct".to_string())])?;
//!     assert_eq!(direct.downcast::<Greeter>()?.greeting, "direct");
//!     Ok(())
//! }
//! ```
//!
//! Wyre DI consists of the following components:
//!
//! 1. Container - the registry, its configuration operations and the
//!    resolution engine
//! 2. Construct - constructable classes, dependency items and argument
//!    extraction
//! 3. Types - erased instances and type identities
//! 4. Errors - configuration and resolution errors

pub mod construct;
pub mod container;
pub mod errors;
pub mod types;

pub use construct::{Args, Construct, Constructor, Dependency};
pub use container::DiContainer;
pub use errors::{ArgError, ConfigureError, ResolveError};
pub use types::{DynError, Injectable, Instance, TypeInfo};
