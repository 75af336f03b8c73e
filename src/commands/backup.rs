//! `taskmaster export` and `taskmaster import` commands.

use std::path::Path;

use crate::manager::TaskManager;

/// Execute the `export` command, writing a dated backup into `dir`.
///
/// # Errors
///
/// Returns an error string if the backup file cannot be written.
pub fn export(manager: &TaskManager<'_>, dir: &Path) -> Result<(), String> {
    let path = manager.export(dir).map_err(|e| e.to_string())?;
    println!("Exported {} task(s) to {}", manager.tasks().len(), path.display());
    Ok(())
}

/// Execute the `import` command, merging tasks from `file`.
///
/// # Errors
///
/// Returns an error string if the file cannot be read or is not a task array.
pub fn import(manager: &mut TaskManager<'_>, file: &Path) -> Result<(), String> {
    let summary = manager.import_file(file).map_err(|e| e.to_string())?;
    println!(
        "Imported {} task(s), skipped {} already present.",
        summary.imported, summary.skipped
    );
    Ok(())
}
