//! Advisory task validation.
//!
//! Checks are reported, not enforced: the manager only rejects empty titles,
//! and imports are merged without running these rules.

use serde::Serialize;
use serde_json::Value;

use crate::task::{Priority, Task};

/// Longest accepted title, in characters.
pub const MAX_TITLE_CHARS: usize = 500;

const TITLE_REQUIRED: &str = "Task title is required";
const TITLE_TOO_LONG: &str = "Task title is too long (max 500 characters)";
const INVALID_PRIORITY: &str = "Invalid priority level";

/// Outcome of validating one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskValidation {
    /// `true` when `errors` is empty.
    pub is_valid: bool,
    /// One message per violated rule.
    pub errors: Vec<String>,
}

impl TaskValidation {
    fn from_errors(errors: Vec<String>) -> Self {
        Self { is_valid: errors.is_empty(), errors }
    }
}

fn title_errors(title: Option<&str>) -> Vec<String> {
    let mut errors = Vec::new();
    match title {
        Some(t) if !t.trim().is_empty() => {
            if t.chars().count() > MAX_TITLE_CHARS {
                errors.push(TITLE_TOO_LONG.to_string());
            }
        }
        Some(t) => {
            errors.push(TITLE_REQUIRED.to_string());
            if t.chars().count() > MAX_TITLE_CHARS {
                errors.push(TITLE_TOO_LONG.to_string());
            }
        }
        None => errors.push(TITLE_REQUIRED.to_string()),
    }
    errors
}

/// Validates a raw JSON task, so an absent or unknown priority is reported
/// instead of failing to decode.
#[must_use]
pub fn validate_task(task: &Value) -> TaskValidation {
    let mut errors = title_errors(task.get("title").and_then(Value::as_str));

    let priority_ok = task
        .get("priority")
        .and_then(Value::as_str)
        .is_some_and(|p| Priority::ALL.iter().any(|known| known.as_str() == p));
    if !priority_ok {
        errors.push(INVALID_PRIORITY.to_string());
    }

    TaskValidation::from_errors(errors)
}

/// Validates a typed task. Priority is always valid here.
#[must_use]
pub fn validate(task: &Task) -> TaskValidation {
    TaskValidation::from_errors(title_errors(Some(&task.title)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_a_well_formed_task() {
        let v = validate_task(&json!({"title": "Write docs", "priority": "medium"}));
        assert!(v.is_valid);
        assert!(v.errors.is_empty());
    }

    #[test]
    fn reports_every_violation() {
        let v = validate_task(&json!({"title": "   ", "priority": "urgent"}));
        assert!(!v.is_valid);
        assert_eq!(v.errors, vec![TITLE_REQUIRED.to_string(), INVALID_PRIORITY.to_string()]);
    }

    #[test]
    fn missing_fields_are_reported() {
        let v = validate_task(&json!({}));
        assert_eq!(v.errors.len(), 2);
    }

    #[test]
    fn long_titles_are_rejected() {
        let title = "x".repeat(MAX_TITLE_CHARS + 1);
        let v = validate_task(&json!({"title": title, "priority": "low"}));
        assert_eq!(v.errors, vec![TITLE_TOO_LONG.to_string()]);

        let at_limit = "é".repeat(MAX_TITLE_CHARS);
        assert!(validate_task(&json!({"title": at_limit, "priority": "low"})).is_valid);
    }
}
