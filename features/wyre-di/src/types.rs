use std::{
    any::{Any, TypeId},
    sync::Arc,
};

/// Errors crossing a constructor boundary are boxed and stay boxed
pub type DynError = Box<dyn std::error::Error + Send + Sync>;

/// Instances are handed out as shared handles and may cross threads,
/// so anything the container manages needs to be Send + Sync + 'static
pub trait Injectable: Send + Sync + 'static {}
impl<T: Send + Sync + 'static> Injectable for T {}

/// A constructed instance, erased for storage.
///
/// Shared instances returned by the container are clones of one `Arc`,
/// so two handles to the same shared instance compare pointer-equal
/// after [`Instance::downcast`].
#[derive(Clone)]
pub struct Instance {
    info: TypeInfo,
    instance: Arc<dyn Any + Send + Sync + 'static>,
}

impl Instance {
    pub(crate) fn new<T: Injectable>(instance: T) -> Self {
        Instance {
            info: TypeInfo::of::<T>(),
            instance: Arc::new(instance),
        }
    }

    /// Wraps a plain value so it can travel through a dependency list
    pub fn value<T: Injectable>(value: T) -> Self {
        Self::new(value)
    }

    pub fn type_info(&self) -> TypeInfo {
        self.info
    }

    pub fn type_name(&self) -> &'static str {
        self.info.type_name
    }

    /// Whether the contained value is a `T`
    pub fn is<T: Injectable>(&self) -> bool {
        self.info.type_id == TypeId::of::<T>()
    }

    /// Attempts to downcast the contained value.
    ///
    /// On mismatch the actual type name is returned instead.
    pub fn downcast<T: Injectable>(&self) -> Result<Arc<T>, &'static str> {
        match Arc::downcast::<T>(self.instance.clone()) {
            Ok(downcasted) => Ok(downcasted),
            Err(_) => Err(self.info.type_name),
        }
    }
}

impl std::fmt::Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Instance").field(&self.info.type_name).finish()
    }
}

/// Type Name and Type Id
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct TypeInfo {
    pub type_name: &'static str,
    pub type_id: TypeId,
}
impl std::fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name)
    }
}
impl TypeInfo {
    pub fn of<T: 'static + ?Sized>() -> TypeInfo {
        TypeInfo {
            type_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }
}
