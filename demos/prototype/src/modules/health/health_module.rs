use wyre_di::{ConfigureError, Dependency, DiContainer};

use super::{
    ping_service::PingService,
    storage::{MemoryStorage, Storage},
};

/// Wires the health module into a container: the probe target as
/// configuration, the storage backend as an implementation mapping
pub fn register(di: &mut DiContainer, target: &str) -> Result<(), ConfigureError> {
    di.configure::<PingService>(vec![Dependency::value(target.to_string())])?
        .set_implementation::<Storage, MemoryStorage>()?;
    Ok(())
}
