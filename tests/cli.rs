//! Integration tests for top-level CLI behavior.

use std::path::Path;
use std::process::Command;

fn run_taskmaster(dir: &Path, args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_taskmaster");
    Command::new(bin)
        .current_dir(dir)
        .arg("--data-dir")
        .arg(dir.join("data"))
        .args(args)
        .env_remove("TASKMASTER_HOME")
        .env_remove("TASKMASTER_EXPORT_DIR")
        .env_remove("TASKMASTER_RECORD")
        .env_remove("TASKMASTER_REPLAY")
        .output()
        .expect("failed to run taskmaster binary")
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Adds a task and returns the id printed by `add`.
fn add(dir: &Path, title: &str, priority: &str) -> String {
    let output = run_taskmaster(dir, &["add", title, "--priority", priority]);
    assert!(output.status.success(), "add failed: {}", String::from_utf8_lossy(&output.stderr));
    stdout(&output).split_whitespace().nth(1).expect("add prints the new id").to_string()
}

#[test]
fn list_on_empty_store_says_no_tasks() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_taskmaster(dir.path(), &["list"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No tasks found."));
}

#[test]
fn added_tasks_list_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    add(dir.path(), "Buy milk", "low");
    add(dir.path(), "Ship release", "high");

    let out = stdout(&run_taskmaster(dir.path(), &["list"]));
    let ship = out.find("Ship release").unwrap();
    let milk = out.find("Buy milk").unwrap();
    assert!(ship < milk);
    assert!(out.contains("2 of 2 task(s) shown."));
    assert!(dir.path().join("data/taskmaster_tasks").exists());
}

#[test]
fn add_without_priority_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_taskmaster(dir.path(), &["add", "No priority"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--priority"));
}

#[test]
fn blank_title_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_taskmaster(dir.path(), &["add", "   ", "-p", "low"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Task title is required"));
}

#[test]
fn toggle_and_filter() {
    let dir = tempfile::tempdir().unwrap();
    let id = add(dir.path(), "Write report", "medium");
    add(dir.path(), "Call mom", "low");

    assert!(run_taskmaster(dir.path(), &["toggle", &id]).status.success());

    let done = stdout(&run_taskmaster(dir.path(), &["list", "--filter", "completed"]));
    assert!(done.contains("Write report"));
    assert!(!done.contains("Call mom"));

    let pending = stdout(&run_taskmaster(dir.path(), &["list", "-f", "pending", "-s", "CALL"]));
    assert!(pending.contains("Call mom"));
}

#[test]
fn toggle_unknown_id_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_taskmaster(dir.path(), &["toggle", "nope"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Task 'nope' not found"));
}

#[test]
fn delete_requires_yes() {
    let dir = tempfile::tempdir().unwrap();
    let id = add(dir.path(), "Temporary", "low");

    let dry = run_taskmaster(dir.path(), &["delete", &id]);
    assert!(stdout(&dry).contains("--yes"));
    assert!(stdout(&run_taskmaster(dir.path(), &["list"])).contains("Temporary"));

    assert!(run_taskmaster(dir.path(), &["delete", &id, "--yes"]).status.success());
    assert!(stdout(&run_taskmaster(dir.path(), &["list"])).contains("No tasks found."));
}

#[test]
fn complete_all_then_stats() {
    let dir = tempfile::tempdir().unwrap();
    add(dir.path(), "a", "high");
    add(dir.path(), "b", "low");

    let out = stdout(&run_taskmaster(dir.path(), &["complete-all"]));
    assert!(out.contains("Marked 2 task(s) completed."));

    let stats = stdout(&run_taskmaster(dir.path(), &["stats"]));
    assert!(stats.contains("Completion rate: 100%"));

    let storage = stdout(&run_taskmaster(dir.path(), &["storage"]));
    assert!(storage.contains("Stored tasks: 2 (2 completed, 0 pending)"));
}

#[test]
fn export_then_import_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    add(dir.path(), "Backed up", "high");

    let out = stdout(&run_taskmaster(dir.path(), &["export", "--output", "backups"]));
    assert!(out.contains("Exported 1 task(s)"));
    let backup = std::fs::read_dir(dir.path().join("backups"))
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();
    let name = backup.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("taskmaster-backup-") && name.ends_with(".json"));

    let out = stdout(&run_taskmaster(dir.path(), &["import", backup.to_str().unwrap()]));
    assert!(out.contains("Imported 0 task(s), skipped 1"));
}

#[test]
fn import_rejects_non_array() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("bad.json");
    std::fs::write(&file, r#"{"tasks": []}"#).unwrap();

    let output = run_taskmaster(dir.path(), &["import", file.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid data format"));
}

#[test]
fn numeric_ids_from_a_backup_are_addressable() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("browser.json");
    std::fs::write(
        &file,
        r#"[{"id": 1710057600000, "title": "From the browser", "priority": "high",
            "completed": false, "createdAt": "2024-03-10T08:00:00.000Z",
            "updatedAt": "2024-03-10T08:00:00.000Z"}]"#,
    )
    .unwrap();
    assert!(run_taskmaster(dir.path(), &["import", file.to_str().unwrap()]).status.success());

    let toggled = run_taskmaster(dir.path(), &["toggle", "1710057600000"]);
    assert!(toggled.status.success(), "{}", String::from_utf8_lossy(&toggled.stderr));
    assert!(stdout(&toggled).contains("Marked 1710057600000 completed"));

    let edited = run_taskmaster(dir.path(), &["edit", "1710057600000", "Renamed"]);
    assert!(edited.status.success());
    assert!(stdout(&edited).contains("Updated 1710057600000: Renamed"));

    let deleted = run_taskmaster(dir.path(), &["delete", "1710057600000", "--yes"]);
    assert!(deleted.status.success());
    assert!(stdout(&run_taskmaster(dir.path(), &["list"])).contains("No tasks found."));
}

#[test]
fn theme_toggles_and_clear_all_resets() {
    let dir = tempfile::tempdir().unwrap();
    assert!(stdout(&run_taskmaster(dir.path(), &["theme"])).contains("Theme: light"));
    assert!(stdout(&run_taskmaster(dir.path(), &["theme", "toggle"])).contains("Theme: dark"));
    assert!(stdout(&run_taskmaster(dir.path(), &["theme"])).contains("Theme: dark"));

    add(dir.path(), "gone soon", "low");
    assert!(stdout(&run_taskmaster(dir.path(), &["clear-all"])).contains("--yes"));
    assert!(run_taskmaster(dir.path(), &["clear-all", "--yes"]).status.success());

    assert!(stdout(&run_taskmaster(dir.path(), &["theme"])).contains("Theme: light"));
    assert!(stdout(&run_taskmaster(dir.path(), &["list"])).contains("No tasks found."));
}

#[test]
fn help_lists_subcommands() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_taskmaster(dir.path(), &["--help"]);
    let text = format!("{}{}", stdout(&output), String::from_utf8_lossy(&output.stderr));
    for sub in ["add", "list", "toggle", "clear-completed", "export", "import", "theme"] {
        assert!(text.contains(sub), "help is missing {sub}");
    }
}
