//! In-memory key-value store.
//!
//! # Responsibility
//! - Provide a process-local [`KeyValueStore`] for tests and demos.
//!
//! # Invariants
//! - `get`/`set` never fail; the backing map is plain owned strings.

use super::{KeyValueStore, StoreResult};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Map-backed store fake. Share between roles via `Arc<MemoryStore>`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        // A poisoned lock still holds valid string data; recover it.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
