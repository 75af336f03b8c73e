//! Aggregate counts over the collection.

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::task::{Priority, Task};
use crate::util::is_today;

/// Counts shown in the statistics panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    /// Number of tasks.
    pub total: usize,
    /// Number of completed tasks.
    pub completed: usize,
    /// Number of pending tasks.
    pub pending: usize,
    /// Tasks created on the current calendar day of `now`'s zone.
    pub today: usize,
    /// High-priority tasks.
    pub high: usize,
    /// Medium-priority tasks.
    pub medium: usize,
    /// Low-priority tasks.
    pub low: usize,
    /// Completed share as a whole percentage.
    pub completion_rate: u32,
}

impl TaskStats {
    /// Tallies `tasks`, judging "today" against `now`.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn compute<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> Self {
        let mut stats = Self { total: tasks.len(), ..Self::default() };
        for task in tasks {
            if task.completed {
                stats.completed += 1;
            }
            if is_today(&task.created_at, now) {
                stats.today += 1;
            }
            match task.priority {
                Priority::High => stats.high += 1,
                Priority::Medium => stats.medium += 1,
                Priority::Low => stats.low += 1,
            }
        }
        stats.pending = stats.total - stats.completed;
        if stats.total > 0 {
            stats.completion_rate =
                (stats.completed as f64 / stats.total as f64 * 100.0).round() as u32;
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskId;
    use chrono::{Duration, Utc};

    #[test]
    fn empty_collection_has_zero_rate() {
        let stats = TaskStats::compute(&[], &Utc::now());
        assert_eq!(stats, TaskStats::default());
    }

    #[test]
    fn rate_rounds_to_whole_percent() {
        let now = Utc.with_ymd_and_hms(2024, 7, 4, 12, 0, 0).unwrap();
        let mut tasks: Vec<Task> = (0..3)
            .map(|i| Task::new(TaskId::Number(i), "t", Priority::Low, now - Duration::days(i)))
            .collect();
        tasks[0].set_completed(true, now);

        let stats = TaskStats::compute(&tasks, &now);
        assert_eq!(stats.completion_rate, 33);
        assert_eq!(stats.today, 1);
        assert_eq!(stats.low, 3);
        assert_eq!(stats.pending, 2);
    }
}
