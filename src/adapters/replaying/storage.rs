//! Replaying adapter for the `KeyValueStore` port.

use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{KeyValueStore, PortError};

/// Replays recorded key-value traffic from a cassette.
///
/// Writes are not applied anywhere; they only return the recorded outcome.
pub struct ReplayingStore {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingStore {
    /// Creates a new replaying store from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl KeyValueStore for ReplayingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, PortError> {
        let output = next_output(&self.replayer, "storage", "get");
        replay_result(&output, "storage::get")
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), PortError> {
        let output = next_output(&self.replayer, "storage", "set");
        replay_result(&output, "storage::set")
    }

    fn remove(&self, _key: &str) -> Result<(), PortError> {
        let output = next_output(&self.replayer, "storage", "remove");
        replay_result(&output, "storage::remove")
    }
}
