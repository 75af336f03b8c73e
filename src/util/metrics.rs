//! Productivity metrics over a task list.

use serde::Serialize;

use super::format_duration;
use crate::task::Task;

/// Summary produced by [`calculate_productivity`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Productivity {
    /// Number of tasks.
    pub total: usize,
    /// Number of completed tasks.
    pub completed: usize,
    /// Number of pending tasks.
    pub pending: usize,
    /// Completed share as a percentage, rounded to two decimals.
    pub completion_rate: f64,
    /// Mean created-to-completed span, or "N/A".
    pub avg_completion_time: String,
}

/// Computes completion counts, rate, and average completion time.
///
/// Only completed tasks that carry a `completed_at` contribute to the
/// average.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn calculate_productivity(tasks: &[Task]) -> Productivity {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let completion_rate = if total > 0 {
        ((completed as f64 / total as f64) * 100.0 * 100.0).round() / 100.0
    } else {
        0.0
    };

    let spans: Vec<i64> =
        tasks.iter().filter(|t| t.completed).filter_map(Task::completion_millis).collect();
    let avg_ms = if spans.is_empty() {
        0
    } else {
        spans.iter().sum::<i64>() / i64::try_from(spans.len()).unwrap_or(i64::MAX)
    };

    Productivity {
        total,
        completed,
        pending: total - completed,
        completion_rate,
        avg_completion_time: format_duration(avg_ms),
    }
}
