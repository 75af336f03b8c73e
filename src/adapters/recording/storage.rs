//! Recording adapter for the `KeyValueStore` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{KeyValueStore, PortError};

/// Records key-value traffic while delegating to an inner store.
pub struct RecordingStore {
    inner: Box<dyn KeyValueStore>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingStore {
    /// Creates a new recording store wrapping the given implementation.
    pub fn new(inner: Box<dyn KeyValueStore>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct KeyInput<'a> {
    key: &'a str,
}

#[derive(Serialize)]
struct SetInput<'a> {
    key: &'a str,
    value: &'a str,
}

impl KeyValueStore for RecordingStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortError> {
        let result = self.inner.get(key);
        record_result(&self.recorder, "storage", "get", &KeyInput { key }, &result);
        result
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortError> {
        let result = self.inner.set(key, value);
        record_result(&self.recorder, "storage", "set", &SetInput { key, value }, &result);
        result
    }

    fn remove(&self, key: &str) -> Result<(), PortError> {
        let result = self.inner.remove(key);
        record_result(&self.recorder, "storage", "remove", &KeyInput { key }, &result);
        result
    }
}
