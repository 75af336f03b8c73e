//! Task collection manager: owns the in-memory list and every mutation.
//!
//! The manager is built from whatever the store loads and writes the whole
//! list back after each mutation. Storage is a best-effort mirror, so a
//! failed write never undoes the in-memory change.

mod stats;

use std::convert::Infallible;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, Utc};
use tracing::{debug, info};

use crate::context::ServiceContext;
use crate::error::{TaskError, TaskResult};
use crate::store::{merge_import, parse_import, ImportSummary, StorageStats, TaskStore, Theme};
use crate::task::{timestamp, Priority, StatusFilter, Task, TaskId};
use crate::util::{calculate_productivity, sort_tasks, Productivity, SortCriteria};

pub use stats::TaskStats;

const MAX_ID_ATTEMPTS: usize = 8;

/// Owns the task collection along with the current filter and search query.
pub struct TaskManager<'a> {
    ctx: &'a ServiceContext,
    store: TaskStore<'a>,
    tasks: Vec<Task>,
    filter: StatusFilter,
    query: String,
}

impl<'a> TaskManager<'a> {
    /// Loads the stored collection. Missing or corrupt data starts empty.
    #[must_use]
    pub fn load(ctx: &'a ServiceContext) -> Self {
        let store = TaskStore::new(ctx);
        let tasks = store.load_tasks();
        debug!(count = tasks.len(), "Task manager ready");
        Self { ctx, store, tasks, filter: StatusFilter::All, query: String::new() }
    }

    /// Tasks in collection order, newest additions first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Current status filter.
    #[must_use]
    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    /// Current search query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Sets the status filter used by [`Self::filtered_view`].
    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    /// Sets the search query used by [`Self::filtered_view`].
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Adds a pending task at the front of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Validation`] if the trimmed title is empty.
    pub fn create(&mut self, title: &str, priority: Priority) -> TaskResult<Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::validation("Task title is required"));
        }

        let task = Task::new(self.fresh_id(), title, priority, self.now());
        self.tasks.insert(0, task.clone());
        self.persist();
        info!(id = %task.id, priority = %task.priority, "Created task");
        Ok(task)
    }

    /// Flips completion of the task with `id`. Unknown ids are ignored.
    pub fn toggle_completion(&mut self, id: &TaskId) -> Option<&Task> {
        let now = self.now();
        let index = self.position(id)?;
        let task = &mut self.tasks[index];
        let completed = !task.completed;
        task.set_completed(completed, now);
        debug!(id = %id, completed, "Toggled task");
        self.persist();
        Some(&self.tasks[index])
    }

    /// Replaces the title of the task with `id`.
    ///
    /// A blank title leaves the task untouched. Unknown ids are ignored.
    pub fn edit(&mut self, id: &TaskId, title: &str) -> Option<&Task> {
        let index = self.position(id)?;
        let title = title.trim();
        if title.is_empty() {
            debug!(id = %id, "Discarded blank title edit");
            return Some(&self.tasks[index]);
        }

        let now = self.now();
        let task = &mut self.tasks[index];
        title.clone_into(&mut task.title);
        task.touch(now);
        self.persist();
        Some(&self.tasks[index])
    }

    /// Removes and returns the task with `id`, if present.
    pub fn delete(&mut self, id: &TaskId) -> Option<Task> {
        let index = self.position(id)?;
        let removed = self.tasks.remove(index);
        self.persist();
        info!(id = %id, "Deleted task");
        Some(removed)
    }

    /// Removes every completed task and returns how many went.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        if removed > 0 {
            self.persist();
            info!(removed, "Cleared completed tasks");
        }
        removed
    }

    /// Completes every pending task and returns how many changed.
    pub fn mark_all_complete(&mut self) -> usize {
        let now = self.now();
        let mut changed = 0;
        for task in self.tasks.iter_mut().filter(|t| !t.completed) {
            task.set_completed(true, now);
            changed += 1;
        }
        if changed > 0 {
            self.persist();
            info!(changed, "Marked all tasks complete");
        }
        changed
    }

    /// Tasks passing the held filter and search query.
    #[must_use]
    pub fn filtered_view(&self) -> Vec<&Task> {
        self.filtered_view_with(self.filter, &self.query)
    }

    /// Tasks whose title contains `query` (case-insensitively) and that pass
    /// `filter`, in collection order.
    #[must_use]
    pub fn filtered_view_with(&self, filter: StatusFilter, query: &str) -> Vec<&Task> {
        let needle = query.trim().to_lowercase();
        self.tasks
            .iter()
            .filter(|t| needle.is_empty() || t.title.to_lowercase().contains(&needle))
            .filter(|t| filter.matches(t))
            .collect()
    }

    /// The filtered view ordered by `criteria`, pending tasks first.
    #[must_use]
    pub fn sorted_view(&self, criteria: SortCriteria) -> Vec<Task> {
        let view: Vec<Task> = self.filtered_view().into_iter().cloned().collect();
        sort_tasks(&view, criteria)
    }

    /// Collection counts, with "today" in the local time zone.
    #[must_use]
    pub fn compute_stats(&self) -> TaskStats {
        TaskStats::compute(&self.tasks, &self.ctx.clock.now().with_timezone(&Local))
    }

    /// Completion metrics over the whole collection.
    #[must_use]
    pub fn productivity(&self) -> Productivity {
        calculate_productivity(&self.tasks)
    }

    /// Counts and size of what is currently in storage.
    #[must_use]
    pub fn storage_stats(&self) -> StorageStats {
        self.store.storage_stats()
    }

    /// Merges tasks from backup text, keeping every existing id.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Parse`] or [`TaskError::Format`] when the text is
    /// not a task array; nothing is merged in that case.
    pub fn import(&mut self, contents: &str) -> TaskResult<ImportSummary> {
        let incoming = parse_import(contents)?;
        Ok(self.merge(incoming))
    }

    /// Merges tasks from a backup file.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Io`] if the file cannot be read, otherwise as
    /// [`Self::import`].
    pub fn import_file(&mut self, path: &Path) -> TaskResult<ImportSummary> {
        let incoming = self.store.import_from_file(path)?;
        Ok(self.merge(incoming))
    }

    /// Writes a dated backup of the collection into `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backup file cannot be written.
    pub fn export(&self, dir: &Path) -> TaskResult<PathBuf> {
        self.store.export_to_file(&self.tasks, dir)
    }

    /// Wipes stored tasks and theme when `confirmed`, then empties the
    /// collection. Returns whether the wipe happened.
    pub fn clear_all(&mut self, confirmed: bool) -> bool {
        let cleared = self.store.clear_all(confirmed);
        if cleared {
            self.tasks.clear();
        }
        cleared
    }

    /// Stored theme preference.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.store.load_theme()
    }

    /// Stores a theme preference.
    pub fn set_theme(&self, theme: Theme) {
        self.store.save_theme(theme);
    }

    /// Flips and stores the theme, returning the new one.
    pub fn toggle_theme(&self) -> Theme {
        let theme = self.theme().toggled();
        self.set_theme(theme);
        theme
    }

    fn merge(&mut self, incoming: Vec<Task>) -> ImportSummary {
        let summary = merge_import(&mut self.tasks, incoming);
        if summary.imported > 0 {
            self.persist();
        }
        info!(imported = summary.imported, skipped = summary.skipped, "Imported tasks");
        summary
    }

    fn persist(&self) {
        self.store.save_tasks(&self.tasks);
    }

    fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    fn now(&self) -> DateTime<Utc> {
        timestamp::normalize(self.ctx.clock.now())
    }

    /// Draws ids until one is unused; a generator stuck on taken ids gets a
    /// numeric suffix on its last candidate.
    fn fresh_id(&self) -> TaskId {
        let mut candidate = String::new();
        for _ in 0..MAX_ID_ATTEMPTS {
            candidate = self.ctx.id_gen.generate_id();
            let id = parse_id(&candidate);
            if self.position(&id).is_none() {
                return id;
            }
            debug!(id = %id, "Generated id already taken");
        }

        (2..)
            .map(|n| parse_id(&format!("{candidate}-{n}")))
            .find(|id| self.position(id).is_none())
            .unwrap_or_else(|| TaskId::Text(candidate))
    }
}

fn parse_id(raw: &str) -> TaskId {
    raw.parse().unwrap_or_else(|never: Infallible| match never {})
}
