//! Error types for the task core.

use thiserror::Error;

/// Failures surfaced by the task core.
///
/// None of these are fatal: callers convert them into a message or a
/// safe fallback at the boundary where they occur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Input to create/edit or a validated task broke one or more rules.
    #[error("Validation failed: {}", reasons.join("; "))]
    Validation {
        /// Every rule the input broke.
        reasons: Vec<String>,
    },

    /// No task carries the requested id.
    #[error("Task '{id}' not found")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    /// Persisted or imported data could not be decoded.
    #[error("Failed to parse task data: {reason}")]
    Parse {
        /// Decoder message.
        reason: String,
    },

    /// Imported payload decoded but has the wrong shape.
    #[error("Invalid data format: {reason}")]
    Format {
        /// What was expected instead.
        reason: String,
    },

    /// The key-value store rejected a read or write.
    #[error("Storage error: {reason}")]
    Storage {
        /// Message from the store.
        reason: String,
    },

    /// Reading or writing an import/export file failed.
    #[error("Failed to access file '{path}': {reason}")]
    Io {
        /// File that was being read or written.
        path: String,
        /// Underlying I/O message.
        reason: String,
    },

    /// Runtime configuration is unusable.
    #[error("Configuration error: {reason}")]
    Config {
        /// Which settings conflict or are invalid.
        reason: String,
    },
}

impl TaskError {
    /// Builds a validation error carrying a single reason.
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation { reasons: vec![reason.into()] }
    }
}

impl From<serde_json::Error> for TaskError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse { reason: err.to_string() }
    }
}

impl From<std::io::Error> for TaskError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage { reason: err.to_string() }
    }
}

/// Result type alias for task operations.
pub type TaskResult<T> = Result<T, TaskError>;
