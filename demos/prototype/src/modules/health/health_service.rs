use std::sync::Arc;

use wyre_di::{Args, Construct, Dependency, DynError};

use super::{ping_service::PingService, storage::MemoryStorage};

/// Runs the health checks and records their outcome
pub struct HealthService {
    ping: Arc<PingService>,
    storage: Arc<MemoryStorage>,
}

impl HealthService {
    /// Probes the target once and records the outcome
    pub fn run_checks(&self) {
        let healthy = self.ping.ping();
        let status = if healthy { "healthy" } else { "unhealthy" };
        self.storage
            .record(format!("{}: {status}", self.ping.target()));
    }
}

impl Construct for HealthService {
    fn construct(mut args: Args) -> Result<Self, DynError> {
        Ok(HealthService {
            ping: args.shared()?,
            storage: args.shared()?,
        })
    }

    fn get_dependencies(name: &str) -> Option<Vec<Dependency>> {
        (name == "dependencies").then(|| {
            vec![
                Dependency::class::<PingService>(),
                Dependency::class::<MemoryStorage>(),
            ]
        })
    }
}
