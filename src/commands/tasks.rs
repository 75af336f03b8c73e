//! Single-task commands: `add`, `toggle`, `edit`, `delete`.

use crate::error::TaskError;
use crate::manager::TaskManager;
use crate::task::{Priority, TaskId};
use crate::util::validate;

fn not_found(id: &TaskId) -> String {
    TaskError::NotFound { id: id.to_string() }.to_string()
}

/// Execute the `add` command. Titles over the length limit are stored but
/// reported on stderr.
///
/// # Errors
///
/// Returns an error string if the title is blank.
pub fn add(manager: &mut TaskManager<'_>, title: &str, priority: Priority) -> Result<(), String> {
    let task = manager.create(title, priority).map_err(|e| e.to_string())?;
    println!("Added {} ({}): {}", task.id, task.priority, task.title);
    for warning in validate(&task).errors {
        eprintln!("Warning: {warning}");
    }
    Ok(())
}

/// Execute the `toggle` command.
///
/// # Errors
///
/// Returns an error string if no task has the given id.
pub fn toggle(manager: &mut TaskManager<'_>, id: &TaskId) -> Result<(), String> {
    let task = manager.toggle_completion(id).ok_or_else(|| not_found(id))?;
    let state = if task.completed { "completed" } else { "pending" };
    println!("Marked {} {state}: {}", task.id, task.title);
    Ok(())
}

/// Execute the `edit` command. A blank title leaves the task as it was.
///
/// # Errors
///
/// Returns an error string if no task has the given id.
pub fn edit(manager: &mut TaskManager<'_>, id: &TaskId, title: &str) -> Result<(), String> {
    let blank = title.trim().is_empty();
    let task = manager.edit(id, title).ok_or_else(|| not_found(id))?;
    if blank {
        println!("Title unchanged: {}", task.title);
    } else {
        println!("Updated {}: {}", task.id, task.title);
    }
    Ok(())
}

/// Execute the `delete` command. Without `confirmed`, only reports what
/// would be removed.
///
/// # Errors
///
/// Returns an error string if no task has the given id.
pub fn delete(manager: &mut TaskManager<'_>, id: &TaskId, confirmed: bool) -> Result<(), String> {
    if !confirmed {
        let task = manager.find(id).ok_or_else(|| not_found(id))?;
        println!("Would delete {}: {}. Re-run with --yes to confirm.", task.id, task.title);
        return Ok(());
    }

    let task = manager.delete(id).ok_or_else(|| not_found(id))?;
    println!("Deleted {}: {}", task.id, task.title);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::memory_context;

    #[test]
    fn add_rejects_blank_title() {
        let (ctx, _) = memory_context();
        let mut manager = TaskManager::load(&ctx);
        let err = add(&mut manager, "   ", Priority::High).unwrap_err();
        assert!(err.contains("Task title is required"));
    }

    #[test]
    fn delete_needs_confirmation() {
        let (ctx, _) = memory_context();
        let mut manager = TaskManager::load(&ctx);
        add(&mut manager, "keep me", Priority::Low).unwrap();
        let id = TaskId::from("task-1");

        delete(&mut manager, &id, false).unwrap();
        assert!(manager.find(&id).is_some());

        delete(&mut manager, &id, true).unwrap();
        assert!(manager.find(&id).is_none());
        assert!(delete(&mut manager, &id, true).is_err());
    }

    #[test]
    fn edit_reports_missing_task() {
        let (ctx, _) = memory_context();
        let mut manager = TaskManager::load(&ctx);
        assert_eq!(edit(&mut manager, &TaskId::Number(3), "x").unwrap_err(), "Task '3' not found");
    }

    #[test]
    fn blank_edit_keeps_title() {
        let (ctx, _) = memory_context();
        let mut manager = TaskManager::load(&ctx);
        add(&mut manager, "original", Priority::Low).unwrap();
        let id = TaskId::from("task-1");
        edit(&mut manager, &id, " ").unwrap();
        assert_eq!(manager.find(&id).unwrap().title, "original");
    }
}
