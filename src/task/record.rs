//! Core task type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Priority, TaskId};

/// A single to-do item.
///
/// `completed_at` is present exactly while `completed` is true, and
/// `updated_at` is never earlier than `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique key within the collection.
    pub id: TaskId,
    /// Short description shown to the user.
    pub title: String,
    /// Urgency level.
    pub priority: Priority,
    /// Whether the task is done.
    pub completed: bool,
    /// Set once at creation.
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
    /// Set at creation and on every mutation.
    #[serde(with = "super::timestamp")]
    pub updated_at: DateTime<Utc>,
    /// When the task was last completed.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "super::timestamp::option")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a pending task stamped with `now`.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>, priority: Priority, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.into(),
            priority,
            completed: false,
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    /// Marks the task complete or pending, keeping `completed_at` in step.
    pub fn set_completed(&mut self, completed: bool, now: DateTime<Utc>) {
        self.completed = completed;
        self.completed_at = completed.then_some(now);
        self.touch(now);
    }

    /// Advances `updated_at`, never moving it backwards.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = self.updated_at.max(now);
    }

    /// Milliseconds between creation and completion, if completed.
    #[must_use]
    pub fn completion_millis(&self) -> Option<i64> {
        self.completed_at.map(|done| (done - self.created_at).num_milliseconds())
    }
}
