use std::collections::HashMap;
use std::sync::Mutex;

pub mod json_file;

pub use json_file::JsonFileStore;

/// The only contract the content store needs from its persistence
/// medium: an opaque string-keyed blob store. Implementations must never
/// fail loudly: a write that cannot be honored is logged and dropped,
/// matching the browser-storage behavior this models.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Storage keys for each persisted collection, namespaced so several
/// deployments can share one backing store.
#[derive(Debug, Clone)]
pub struct StorageKeys {
    pub events: String,
    pub team: String,
    pub announcement: String,
    pub session: String,
}

impl StorageKeys {
    pub fn with_namespace(namespace: &str) -> Self {
        Self {
            events: format!("{namespace}.events"),
            team: format!("{namespace}.team"),
            announcement: format!("{namespace}.announcement"),
            session: format!("{namespace}.admin-session"),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::with_namespace("chapterhouse")
    }
}

/// In-memory store, used by tests and as the default backend when no
/// durable medium is configured.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}
