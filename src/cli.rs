//! CLI argument definitions.

use std::convert::Infallible;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::task::{Priority, StatusFilter, TaskId};
use crate::util::SortCriteria;

/// Top-level CLI parser for `taskmaster`.
#[derive(Debug, Parser)]
#[command(name = "taskmaster", version, about = "Keep a prioritized task list")]
pub struct Cli {
    /// Directory holding stored tasks and theme (overrides `TASKMASTER_HOME`).
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a task to the top of the list.
    Add {
        /// Task title; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
        /// Priority level (high, medium, low).
        #[arg(short, long)]
        priority: Priority,
    },
    /// Show tasks as a table.
    List {
        /// Restrict by status (all, pending, completed).
        #[arg(short, long, default_value_t)]
        filter: StatusFilter,
        /// Only titles containing this text (case-insensitive).
        #[arg(short, long)]
        search: Option<String>,
        /// Order pending tasks first, then by date or priority.
        #[arg(long)]
        sort: Option<SortCriteria>,
    },
    /// Flip a task between pending and completed.
    Toggle {
        /// Task id.
        #[arg(value_parser = parse_task_id)]
        id: TaskId,
    },
    /// Replace a task's title.
    Edit {
        /// Task id.
        #[arg(value_parser = parse_task_id)]
        id: TaskId,
        /// New title; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Remove a task.
    Delete {
        /// Task id.
        #[arg(value_parser = parse_task_id)]
        id: TaskId,
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
    /// Remove every completed task.
    ClearCompleted {
        /// Confirm the removal.
        #[arg(long)]
        yes: bool,
    },
    /// Mark every pending task completed.
    CompleteAll,
    /// Show collection and productivity statistics.
    Stats,
    /// Show stored task counts and data size.
    Storage,
    /// Write a dated JSON backup of all tasks.
    Export {
        /// Directory for the backup file (overrides `TASKMASTER_EXPORT_DIR`).
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
    /// Merge tasks from a JSON backup, keeping existing ids.
    Import {
        /// Backup file to read.
        file: PathBuf,
    },
    /// Show or change the theme preference.
    Theme {
        /// New theme, or `toggle` to flip the current one.
        action: Option<ThemeAction>,
    },
    /// Delete all stored tasks and the theme preference.
    ClearAll {
        /// Confirm the wipe.
        #[arg(long)]
        yes: bool,
    },
}

/// Parses an id through `FromStr`, so all-digit input is a numeric id.
fn parse_task_id(s: &str) -> Result<TaskId, Infallible> {
    s.parse()
}

/// Argument of the `theme` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    /// Switch to the light theme.
    Light,
    /// Switch to the dark theme.
    Dark,
    /// Flip the current theme.
    Toggle,
}
