//! Directory-backed key-value store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::ports::{KeyValueStore, PortError};

/// Stores each key as one file under a data directory.
///
/// Values are written to a sibling temp file and renamed into place, so a
/// crash mid-write leaves the previous value intact.
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Creates a store rooted at `root`. The directory is created lazily on
    /// the first write.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self { root: root.to_path_buf() }
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, PortError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(format!("Invalid storage key '{key}'").into());
        }
        Ok(self.root.join(key))
    }
}

impl KeyValueStore for DirectoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PortError> {
        let path = self.key_path(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortError> {
        let path = self.key_path(key)?;
        std::fs::create_dir_all(&self.root)?;
        let tmp = self.root.join(format!(".{key}.tmp"));
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PortError> {
        let path = self.key_path(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
