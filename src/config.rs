//! Runtime configuration.
//!
//! Values come from the process environment, after `.env` has been loaded
//! with `dotenvy`. Command line flags override them in `commands`.

use std::path::PathBuf;

use crate::error::{TaskError, TaskResult};

/// Environment variable naming the data directory.
pub const HOME_VAR: &str = "TASKMASTER_HOME";
/// Environment variable naming the default export directory.
pub const EXPORT_DIR_VAR: &str = "TASKMASTER_EXPORT_DIR";
/// Environment variable holding the log filter.
pub const LOG_VAR: &str = "TASKMASTER_LOG";
/// Environment variable enabling cassette recording into a directory.
pub const RECORD_VAR: &str = "TASKMASTER_RECORD";
/// Environment variable enabling replay from a cassette file.
pub const REPLAY_VAR: &str = "TASKMASTER_REPLAY";

const DEFAULT_DATA_DIR: &str = ".taskmaster";

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the key-value store files.
    pub data_dir: PathBuf,
    /// Directory backups are written to when no `--output` is given.
    pub export_dir: PathBuf,
    /// Tracing filter directive, if configured.
    pub log_filter: Option<String>,
    /// Base directory for recorded cassettes, if recording.
    pub record_dir: Option<PathBuf>,
    /// Cassette to replay instead of touching real ports, if replaying.
    pub replay_cassette: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            export_dir: PathBuf::from("."),
            log_filter: None,
            record_dir: None,
            replay_cassette: None,
        }
    }
}

impl AppConfig {
    /// Loads `.env` (if present) and reads the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        // A missing .env file is the normal case.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup. Empty values are
    /// treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            data_dir: get(HOME_VAR).map_or(defaults.data_dir, PathBuf::from),
            export_dir: get(EXPORT_DIR_VAR).map_or(defaults.export_dir, PathBuf::from),
            log_filter: get(LOG_VAR),
            record_dir: get(RECORD_VAR).map(PathBuf::from),
            replay_cassette: get(REPLAY_VAR).map(PathBuf::from),
        }
    }

    /// Rejects settings that cannot be honored together.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Config`] if recording and replay are both enabled.
    pub fn validate(&self) -> TaskResult<()> {
        if self.record_dir.is_some() && self.replay_cassette.is_some() {
            return Err(TaskError::Config {
                reason: format!("{RECORD_VAR} and {REPLAY_VAR} cannot both be set"),
            });
        }
        Ok(())
    }
}
