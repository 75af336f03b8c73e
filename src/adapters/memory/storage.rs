//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::ports::{KeyValueStore, PortError};

/// Key-value store held in memory, with a switch to simulate refused writes.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    reject_writes: Arc<AtomicBool>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// When `true`, `set` fails as if the storage quota were exceeded.
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// Raw value under `key`, bypassing the port.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    /// Writes a raw value, bypassing the write switch.
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortError> {
        Ok(self.peek(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(format!("Quota exceeded writing '{key}'").into());
        }
        self.seed(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PortError> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_writes_leave_value_unchanged() {
        let store = MemoryStore::new();
        store.set("k", "v1").unwrap();
        store.reject_writes(true);
        assert!(store.set("k", "v2").is_err());
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v1"));
    }
}
