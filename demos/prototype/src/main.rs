use tracing_subscriber::EnvFilter;
use wyre_di::{Dependency, DiContainer, DynError};

use crate::modules::health::{
    health_module,
    health_report::HealthReport,
    health_service::HealthService,
    storage::{MemoryStorage, Storage},
};

mod modules;

fn main() -> Result<(), DynError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let mut di = DiContainer::new();
    health_module::register(&mut di, "core-api")?;

    // The shared service pulls its declared dependencies in on first use
    let service = di.get::<HealthService>()?.downcast::<HealthService>()?;
    service.run_checks();
    service.run_checks();

    // The storage alias resolves to the same backend the service writes to
    let storage = di.get::<Storage>()?.downcast::<MemoryStorage>()?;
    tracing::info!("Storage holds {} entries", storage.entries().len());

    // Reports are transient, every create builds a fresh one
    let report = di
        .create::<HealthReport>(vec![
            Dependency::value("morning report".to_string()),
            Dependency::class::<MemoryStorage>(),
        ])?
        .downcast::<HealthReport>()?;
    println!("{}", report.render());

    // Only the shared instances go away, the wiring stays
    di.clear();
    let fresh = di.get::<Storage>()?.downcast::<MemoryStorage>()?;
    tracing::info!("After clear the storage is empty: {} entries", fresh.entries().len());

    Ok(())
}
