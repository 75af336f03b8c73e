//! Durable string-keyed storage port.

use super::PortError;

/// A string-keyed store of string values that outlives the process.
///
/// Mirrors the contract of browser local storage: whole values are read and
/// replaced, a missing key is not an error, and writes may be refused
/// (quota, disabled storage).
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, PortError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the store refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), PortError>;

    /// Removes `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be modified.
    fn remove(&self, key: &str) -> Result<(), PortError>;
}
