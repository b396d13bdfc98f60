use std::sync::Mutex;

use wyre_di::{Args, Construct, DynError};

/// Resolution alias for whichever storage backend the module wires in
pub struct Storage;

impl Construct for Storage {
    fn construct(_args: Args) -> Result<Self, DynError> {
        Ok(Storage)
    }
}

/// In-memory record of health check outcomes
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<Vec<String>>,
}

impl MemoryStorage {
    pub fn record(&self, entry: String) {
        self.entries.lock().expect("entries lock").push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().expect("entries lock").clone()
    }
}

impl Construct for MemoryStorage {
    fn construct(_args: Args) -> Result<Self, DynError> {
        Ok(MemoryStorage::default())
    }
}
