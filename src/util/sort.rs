//! Derived task ordering.

use std::convert::Infallible;
use std::str::FromStr;

use crate::task::Task;

/// Secondary sort key applied within each completion group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortCriteria {
    /// Newest `created_at` first.
    #[default]
    Date,
    /// High, then medium, then low.
    Priority,
}

impl FromStr for SortCriteria {
    type Err = Infallible;

    /// Unknown names fall back to [`SortCriteria::Date`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "priority" => Self::Priority,
            _ => Self::Date,
        })
    }
}

/// Returns a sorted copy of `tasks`.
///
/// Pending tasks always precede completed ones; `criteria` orders tasks
/// within each group. The sort is stable.
#[must_use]
pub fn sort_tasks(tasks: &[Task], criteria: SortCriteria) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| {
        a.completed.cmp(&b.completed).then_with(|| match criteria {
            SortCriteria::Priority => b.priority.rank().cmp(&a.priority.rank()),
            SortCriteria::Date => b.created_at.cmp(&a.created_at),
        })
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Priority, TaskId};
    use chrono::{Duration, TimeZone, Utc};

    fn task(id: i64, priority: Priority, completed: bool, minutes: i64) -> Task {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minutes);
        let mut task = Task::new(TaskId::Number(id), format!("task {id}"), priority, at);
        if completed {
            task.set_completed(true, at);
        }
        task
    }

    fn ids(tasks: &[Task]) -> Vec<TaskId> {
        tasks.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn completion_is_the_primary_key() {
        let tasks = vec![task(1, Priority::High, true, 0), task(2, Priority::Low, false, 0)];
        let sorted = sort_tasks(&tasks, SortCriteria::Priority);
        assert_eq!(ids(&sorted), vec![TaskId::Number(2), TaskId::Number(1)]);
    }

    #[test]
    fn priority_orders_within_group() {
        let tasks = vec![
            task(1, Priority::Low, false, 0),
            task(2, Priority::High, false, 0),
            task(3, Priority::Medium, false, 0),
        ];
        let sorted = sort_tasks(&tasks, SortCriteria::Priority);
        assert_eq!(ids(&sorted), vec![TaskId::Number(2), TaskId::Number(3), TaskId::Number(1)]);
    }

    #[test]
    fn date_orders_newest_first_and_is_stable() {
        let tasks = vec![
            task(1, Priority::Low, false, 10),
            task(2, Priority::Low, false, 30),
            task(3, Priority::Low, false, 10),
        ];
        let sorted = sort_tasks(&tasks, SortCriteria::Date);
        assert_eq!(ids(&sorted), vec![TaskId::Number(2), TaskId::Number(1), TaskId::Number(3)]);
    }

    #[test]
    fn unknown_criteria_falls_back_to_date() {
        assert_eq!("alphabetical".parse::<SortCriteria>().unwrap(), SortCriteria::Date);
        assert_eq!("Priority".parse::<SortCriteria>().unwrap(), SortCriteria::Priority);
    }
}
