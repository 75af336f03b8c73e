//! Replaying adapters that serve recorded interactions.

pub mod clock;
pub mod filesystem;
pub mod id_gen;
pub mod storage;

pub use clock::ReplayingClock;
pub use filesystem::ReplayingFileSystem;
pub use id_gen::ReplayingIdGenerator;
pub use storage::ReplayingStore;

use std::sync::Mutex;

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::PortError;

/// Pull the output of the next recorded `port::method` interaction.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> serde_json::Value {
    let mut replayer = replayer.lock().expect("replayer lock poisoned");
    replayer.next_interaction(port, method).output
}

/// Decode a recorded `{"ok": v}` / `{"err": "message"}` output.
pub(crate) fn replay_result<T: DeserializeOwned>(
    output: &serde_json::Value,
    context: &str,
) -> Result<T, PortError> {
    if let Some(err) = output.get("err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = output.get("ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}
