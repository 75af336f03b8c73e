//! `taskmaster list` command.

use chrono::{DateTime, TimeZone};

use crate::manager::TaskManager;
use crate::task::Task;
use crate::util::{format_date, SortCriteria};

/// Execute the `list` command.
///
/// Prints the manager's filtered view as a table of ID, status, priority,
/// title, and relative creation date. With `sort`, pending tasks come first.
///
/// # Errors
///
/// Currently infallible; returns `Result` for dispatch uniformity.
pub fn run<Tz: TimeZone>(
    manager: &TaskManager<'_>,
    sort: Option<SortCriteria>,
    now: &DateTime<Tz>,
) -> Result<(), String> {
    let tasks: Vec<Task> = match sort {
        Some(criteria) => manager.sorted_view(criteria),
        None => manager.filtered_view().into_iter().cloned().collect(),
    };
    print!("{}", render(&tasks, manager.tasks().len(), now));
    Ok(())
}

/// Renders `tasks` as a table followed by a count line.
#[must_use]
pub fn render<Tz: TimeZone>(tasks: &[Task], total: usize, now: &DateTime<Tz>) -> String {
    if tasks.is_empty() {
        return "No tasks found.\n".to_string();
    }

    let rows: Vec<[String; 5]> = tasks
        .iter()
        .map(|t| {
            [
                t.id.to_string(),
                if t.completed { "done" } else { "pending" }.to_string(),
                t.priority.to_string(),
                t.title.clone(),
                format_date(&t.created_at, now),
            ]
        })
        .collect();

    let headers = ["ID", "STATUS", "PRIORITY", "TITLE", "CREATED"];
    let widths: Vec<usize> = (0..headers.len())
        .map(|col| {
            rows.iter()
                .map(|r| r[col].chars().count())
                .max()
                .unwrap_or(0)
                .max(headers[col].len())
        })
        .collect();

    let mut out = String::new();
    push_row(&mut out, &headers.map(str::to_string), &widths);
    push_row(&mut out, &widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>(), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out.push_str(&format!("\n{} of {total} task(s) shown.\n", rows.len()));
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
