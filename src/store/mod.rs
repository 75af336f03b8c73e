//! Task store: persistence layer for the task list and theme preference.
//!
//! Two string keys in the `KeyValueStore` port hold everything:
//!
//! ```text
//! taskmaster_tasks  -> JSON array of tasks
//! taskmaster_theme  -> "light" | "dark"
//! ```
//!
//! Backups go through the `FileSystem` port as pretty-printed JSON files.
//! Storage is a best-effort mirror of the in-memory list: write failures are
//! logged and swallowed, and unreadable data loads as empty.

mod stats;
mod theme;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::context::ServiceContext;
use crate::error::{TaskError, TaskResult};
use crate::task::{timestamp, Task, TaskId};

pub use stats::{format_bytes, StorageStats};
pub use theme::Theme;

/// Key holding the serialized task list.
pub const TASKS_KEY: &str = "taskmaster_tasks";

/// Key holding the theme preference.
pub const THEME_KEY: &str = "taskmaster_theme";

/// Outcome of merging an import into a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Tasks appended to the collection.
    pub imported: usize,
    /// Tasks dropped because their id was already present.
    pub skipped: usize,
}

/// Persistence layer for tasks and the theme preference.
///
/// All I/O goes through `ctx.storage` and `ctx.fs` so that the store works
/// with live, memory, recording, and replaying adapters.
pub struct TaskStore<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TaskStore<'a> {
    /// Creates a store over the given context.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Writes the full task list under [`TASKS_KEY`].
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the store refuses the write.
    pub fn write_tasks(&self, tasks: &[Task]) -> TaskResult<()> {
        let json = serde_json::to_string(tasks)?;
        self.ctx
            .storage
            .set(TASKS_KEY, &json)
            .map_err(|e| TaskError::Storage { reason: e.to_string() })?;
        debug!(count = tasks.len(), bytes = json.len(), "Saved tasks");
        Ok(())
    }

    /// Writes the full task list, logging instead of propagating failure.
    ///
    /// Returns whether the write went through.
    pub fn save_tasks(&self, tasks: &[Task]) -> bool {
        match self.write_tasks(tasks) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Failed to save tasks");
                false
            }
        }
    }

    /// Reads the stored task list.
    ///
    /// An absent key, an unreadable store, or data that does not decode as a
    /// task list all yield an empty list.
    #[must_use]
    pub fn load_tasks(&self) -> Vec<Task> {
        let raw = match self.ctx.storage.get(TASKS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read stored tasks");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => {
                debug!(count = tasks.len(), bytes = raw.len(), "Loaded tasks");
                tasks
            }
            Err(e) => {
                warn!(error = %TaskError::from(e), "Stored tasks are corrupt, starting empty");
                Vec::new()
            }
        }
    }

    /// Stores the theme preference. Returns whether the write went through.
    pub fn save_theme(&self, theme: Theme) -> bool {
        match self.ctx.storage.set(THEME_KEY, theme.as_str()) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Failed to save theme");
                false
            }
        }
    }

    /// Reads the theme preference, defaulting to light.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        match self.ctx.storage.get(THEME_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                warn!(error = %e, "Ignoring stored theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!(error = %e, "Failed to read theme");
                Theme::default()
            }
        }
    }

    /// Writes `tasks` as pretty-printed JSON to
    /// `<dir>/taskmaster-backup-<YYYY-MM-DD>.json` and returns the path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn export_to_file(&self, tasks: &[Task], dir: &Path) -> TaskResult<PathBuf> {
        let json = serde_json::to_string_pretty(tasks)?;
        let path = dir.join(backup_file_name(&self.ctx.clock.now()));
        self.ctx.fs.write(&path, &json).map_err(|e| TaskError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        info!(count = tasks.len(), path = %path.display(), "Exported tasks");
        Ok(path)
    }

    /// Reads and parses a backup file.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Io`] if the file cannot be read, otherwise the
    /// errors of [`parse_import`].
    pub fn import_from_file(&self, path: &Path) -> TaskResult<Vec<Task>> {
        let io_error = |reason: String| TaskError::Io { path: path.display().to_string(), reason };
        if !self.ctx.fs.exists(path) {
            return Err(io_error("no such file".to_string()));
        }
        let contents = self.ctx.fs.read_to_string(path).map_err(|e| io_error(e.to_string()))?;
        parse_import(&contents)
    }

    /// Removes both stored keys when `confirmed`; returns whether it did.
    ///
    /// Removal failures are logged and do not stop the other key from being
    /// cleared.
    pub fn clear_all(&self, confirmed: bool) -> bool {
        if !confirmed {
            debug!("Clear all declined");
            return false;
        }
        for key in [TASKS_KEY, THEME_KEY] {
            if let Err(e) = self.ctx.storage.remove(key) {
                warn!(key, error = %e, "Failed to clear stored key");
            }
        }
        info!("Cleared all stored data");
        true
    }

    /// Counts and measures the stored task list.
    #[must_use]
    pub fn storage_stats(&self) -> StorageStats {
        StorageStats::for_tasks(&self.load_tasks())
    }
}

/// File name of a backup taken at `now`, dated in UTC.
#[must_use]
pub fn backup_file_name(now: &chrono::DateTime<chrono::Utc>) -> String {
    format!("taskmaster-backup-{}.json", now.format("%Y-%m-%d"))
}

/// Parses backup file contents into tasks.
///
/// # Errors
///
/// - [`TaskError::Parse`] if the text is not JSON or an element is not a task.
/// - [`TaskError::Format`] if the JSON is not an array.
pub fn parse_import(contents: &str) -> TaskResult<Vec<Task>> {
    let value: Value = serde_json::from_str(contents)?;
    let Value::Array(items) = value else {
        return Err(TaskError::Format { reason: "expected an array of tasks".to_string() });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let label = match item.get("id") {
                Some(Value::Number(n)) => format!("task {n} at index {index}"),
                Some(Value::String(s)) => format!("task '{s}' at index {index}"),
                _ => format!("task at index {index}"),
            };
            let mut task: Task = serde_json::from_value(item)
                .map_err(|e| TaskError::Parse { reason: format!("{label}: {e}") })?;
            task.created_at = timestamp::normalize(task.created_at);
            task.updated_at = timestamp::normalize(task.updated_at);
            task.completed_at = task.completed_at.map(timestamp::normalize);
            Ok(task)
        })
        .collect()
}

/// Appends every incoming task whose id is not yet in `tasks`.
///
/// Existing tasks are never overwritten, and a repeated id inside
/// `incoming` is skipped after its first occurrence.
pub fn merge_import(tasks: &mut Vec<Task>, incoming: Vec<Task>) -> ImportSummary {
    let mut seen: HashSet<TaskId> = tasks.iter().map(|t| t.id.clone()).collect();
    let mut summary = ImportSummary::default();

    for task in incoming {
        if seen.insert(task.id.clone()) {
            tasks.push(task);
            summary.imported += 1;
        } else {
            summary.skipped += 1;
        }
    }
    summary
}
