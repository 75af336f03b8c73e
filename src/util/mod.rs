//! Stateless helpers shared by the manager, the store, and the CLI.
//!
//! Nothing in here touches a port; anything time-dependent takes the
//! reference "now" as an argument.

mod clone;
mod date;
mod duration;
mod id;
mod metrics;
mod sort;
mod validate;

pub use clone::deep_clone;
pub use date::{filter_by_date_range, format_date, is_today, is_yesterday};
pub use duration::format_duration;
pub use id::{generate_id, to_base36};
pub use metrics::{calculate_productivity, Productivity};
pub use sort::{sort_tasks, SortCriteria};
pub use validate::{validate, validate_task, TaskValidation, MAX_TITLE_CHARS};
