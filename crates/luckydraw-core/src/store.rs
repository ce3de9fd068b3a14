// Key-value storage capability shared by persistence and the session guard.
//
// Every session pointed at the same backing store sees the same slots, which
// is what makes cross-session conflict detection possible.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;

/// String key/value storage. Writes overwrite; there are no transactions.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Handle passed to every component that touches storage.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// In-memory store. Clones share the same map, so two engines built from
/// clones behave like two sessions over one store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a fresh store in the shared handle type.
    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }

    /// Panics if the mutex is poisoned, which only happens after another
    /// thread panicked mid-write.
    fn slots(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.slots.lock().expect("memory store mutex poisoned")
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.slots().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.slots().remove(key);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
