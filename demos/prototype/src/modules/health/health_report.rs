use std::sync::Arc;

use wyre_di::{Args, Construct, DynError};

use super::storage::MemoryStorage;

/// One-shot snapshot of the recorded health entries.
///
/// Reports are created fresh per request, they are never shared.
pub struct HealthReport {
    title: String,
    storage: Arc<MemoryStorage>,
}

impl HealthReport {
    pub fn render(&self) -> String {
        let entries = self.storage.entries();
        let mut lines = vec![format!("{} ({} entries)", self.title, entries.len())];
        lines.extend(entries);
        lines.join("\n")
    }
}

impl Construct for HealthReport {
    fn construct(mut args: Args) -> Result<Self, DynError> {
        Ok(HealthReport {
            title: args.value()?,
            storage: args.shared()?,
        })
    }
}
