use thiserror::Error;

use crate::types::DynError;

/// Errors rejecting a configuration call.
///
/// A rejected call leaves the container untouched.
#[derive(Error, Debug, Clone)]
pub enum ConfigureError {
    /// The class already carries a configured dependency list
    #[error("'{0}' is already configured")]
    AlreadyConfigured(&'static str),
    /// The class is mapped to an implementation and must stay free of configuration
    #[error("'{0}' is an interface and cannot be configured")]
    IsInterface(&'static str),
    /// The class was already instantiated at least once
    #[error("'{0}' was already instantiated - configuration would not apply to it")]
    AlreadyInstantiated(&'static str),
    /// The interface already has an implementation
    #[error("'{0}' already has an implementation")]
    AlreadyImplemented(&'static str),
    /// The interface carries a configured dependency list
    #[error("'{0}' is configured and cannot become an interface")]
    IsConfigured(&'static str),
    /// The dependencies property name was already changed once
    #[error("The dependencies property name can only be changed once")]
    PropertyNameChanged,
    /// The property name is frozen because an instantiation already happened
    #[error("The dependencies property name cannot change after the first instantiation")]
    PropertyNameFrozen,
}

/// Errors surfacing from a resolution
#[derive(thiserror::Error, Debug)]
pub enum ResolveError {
    /// A constructor failed to build its instance
    #[error("Constructor for '{class}' failed - error: {error:?}")]
    ConstructorFailed {
        class: &'static str,
        error: DynError,
    },
}

/// Errors raised by [`Args`](crate::construct::Args) extraction inside a constructor
#[derive(thiserror::Error, Debug, Clone)]
pub enum ArgError {
    /// The argument at this position holds a different type
    #[error("'{class}' argument {position}: required '{required_type}' actual: '{actual_type}'")]
    Mismatch {
        class: &'static str,
        position: usize,
        required_type: &'static str,
        actual_type: &'static str,
    },
    /// The argument list ran out before this position
    #[error("'{class}' argument {position}: missing - only {supplied} supplied")]
    Missing {
        class: &'static str,
        position: usize,
        supplied: usize,
    },
}
