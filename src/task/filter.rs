//! Status filter applied to task views.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Task;
use crate::error::TaskError;

/// Restricts a view by completion state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// No restriction.
    #[default]
    All,
    /// Only tasks that are not completed.
    Pending,
    /// Only completed tasks.
    Completed,
}

impl StatusFilter {
    /// Returns `true` if the task passes this filter.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
        })
    }
}

impl FromStr for StatusFilter {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "completed" | "done" => Ok(Self::Completed),
            other => Err(TaskError::validation(format!("Unknown status filter '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_filters() {
        assert_eq!("Pending".parse::<StatusFilter>().unwrap(), StatusFilter::Pending);
        assert_eq!("completed".parse::<StatusFilter>().unwrap(), StatusFilter::Completed);
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert!("archived".parse::<StatusFilter>().is_err());
    }
}
