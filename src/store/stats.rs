//! Storage usage statistics.

use serde::Serialize;

use crate::task::Task;

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Counts and serialized size of the stored task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageStats {
    /// Number of stored tasks.
    pub total_tasks: usize,
    /// Number of stored completed tasks.
    pub completed_tasks: usize,
    /// Number of stored pending tasks.
    pub pending_tasks: usize,
    /// Serialized size in bytes.
    pub bytes: usize,
    /// `bytes` rendered by [`format_bytes`].
    pub storage_size: String,
}

impl StorageStats {
    /// Measures `tasks` as they would be written to the store.
    #[must_use]
    pub fn for_tasks(tasks: &[Task]) -> Self {
        let bytes = serde_json::to_string(tasks).map_or(0, |s| s.len());
        Self::with_size(tasks, bytes)
    }

    /// Builds stats for `tasks` with an already-known serialized size.
    #[must_use]
    pub fn with_size(tasks: &[Task], bytes: usize) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total_tasks: tasks.len(),
            completed_tasks: completed,
            pending_tasks: tasks.len() - completed,
            bytes,
            storage_size: format_bytes(bytes),
        }
    }
}

/// Renders a byte count with 1024-based units and at most two decimals,
/// dropping trailing zeros: `"120 Bytes"`, `"2 KB"`, `"1.46 KB"`.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
pub fn format_bytes(bytes: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let bytes = bytes as f64;
    let exponent = (bytes.ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes / 1024_f64.powi(exponent as i32);

    let rendered = format!("{value:.2}");
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{rendered} {}", UNITS[exponent])
}
