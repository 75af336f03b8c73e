//! `taskmaster stats` and `taskmaster storage` commands.

use crate::manager::{TaskManager, TaskStats};
use crate::store::StorageStats;
use crate::util::Productivity;

/// Execute the `stats` command.
///
/// # Errors
///
/// Currently infallible; returns `Result` for dispatch uniformity.
pub fn run(manager: &TaskManager<'_>) -> Result<(), String> {
    print!("{}", render_stats(&manager.compute_stats(), &manager.productivity()));
    Ok(())
}

/// Execute the `storage` command.
///
/// # Errors
///
/// Currently infallible; returns `Result` for dispatch uniformity.
pub fn storage(manager: &TaskManager<'_>) -> Result<(), String> {
    print!("{}", render_storage(&manager.storage_stats()));
    Ok(())
}

/// Renders collection counts and productivity metrics.
#[must_use]
pub fn render_stats(stats: &TaskStats, productivity: &Productivity) -> String {
    format!(
        "Total:           {}\n\
         Completed:       {}\n\
         Pending:         {}\n\
         Created today:   {}\n\
         High priority:   {}\n\
         Medium priority: {}\n\
         Low priority:    {}\n\
         Completion rate: {}%\n\
         Avg completion:  {}\n",
        stats.total,
        stats.completed,
        stats.pending,
        stats.today,
        stats.high,
        stats.medium,
        stats.low,
        stats.completion_rate,
        productivity.avg_completion_time,
    )
}

/// Renders stored counts and size.
#[must_use]
pub fn render_storage(stats: &StorageStats) -> String {
    format!(
        "Stored tasks: {} ({} completed, {} pending)\nData size:    {}\n",
        stats.total_tasks, stats.completed_tasks, stats.pending_tasks, stats.storage_size,
    )
}
