//! Whole-collection commands: `clear-completed`, `complete-all`, `clear-all`.

use crate::manager::TaskManager;

/// Execute the `clear-completed` command. Without `confirmed`, only reports
/// how many tasks would go.
///
/// # Errors
///
/// Currently infallible; returns `Result` for dispatch uniformity.
pub fn clear_completed(manager: &mut TaskManager<'_>, confirmed: bool) -> Result<(), String> {
    if !confirmed {
        let count = manager.compute_stats().completed;
        if count == 0 {
            println!("No completed tasks to clear.");
        } else {
            println!("Would remove {count} completed task(s). Re-run with --yes to confirm.");
        }
        return Ok(());
    }

    match manager.clear_completed() {
        0 => println!("No completed tasks to clear."),
        n => println!("Cleared {n} completed task(s)."),
    }
    Ok(())
}

/// Execute the `complete-all` command.
///
/// # Errors
///
/// Currently infallible; returns `Result` for dispatch uniformity.
pub fn complete_all(manager: &mut TaskManager<'_>) -> Result<(), String> {
    match manager.mark_all_complete() {
        0 => println!("No pending tasks."),
        n => println!("Marked {n} task(s) completed."),
    }
    Ok(())
}

/// Execute the `clear-all` command. Without `confirmed`, only reports what
/// would be wiped.
///
/// # Errors
///
/// Currently infallible; returns `Result` for dispatch uniformity.
pub fn clear_all(manager: &mut TaskManager<'_>, confirmed: bool) -> Result<(), String> {
    let count = manager.tasks().len();
    if manager.clear_all(confirmed) {
        println!("Deleted {count} task(s) and the theme preference.");
    } else {
        println!(
            "Would delete {count} task(s) and the theme preference. Re-run with --yes to confirm."
        );
    }
    Ok(())
}
