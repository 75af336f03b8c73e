//! In-memory filesystem.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::ports::{FileSystem, PortError};

/// Files held in a shared map keyed by path.
#[derive(Clone, Default)]
pub struct MemoryFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl MemoryFileSystem {
    /// Creates an empty filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths of all stored files, sorted.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        let files = self.files.lock().unwrap_or_else(PoisonError::into_inner);
        let mut paths: Vec<PathBuf> = files.keys().cloned().collect();
        paths.sort();
        paths
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, PortError> {
        let files = self.files.lock().unwrap_or_else(PoisonError::into_inner);
        files.get(path).cloned().ok_or_else(|| format!("File not found: {}", path.display()).into())
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError> {
        let mut files = self.files.lock().unwrap_or_else(PoisonError::into_inner);
        files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap_or_else(PoisonError::into_inner);
        files.contains_key(path) || files.keys().any(|k| k.starts_with(path) && k != path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_exist_when_they_hold_files() {
        let fs = MemoryFileSystem::new();
        fs.write(Path::new("/backups/a.json"), "[]").unwrap();
        assert!(fs.exists(Path::new("/backups")));
        assert!(!fs.exists(Path::new("/other")));
        assert_eq!(fs.paths(), vec![PathBuf::from("/backups/a.json")]);
    }
}
