//! Service context bundling all port trait objects.

use std::path::Path;

use crate::adapters::live::{DirectoryStore, LiveClock, LiveFileSystem, LiveIdGenerator};
use crate::adapters::recording::{
    RecordingClock, RecordingFileSystem, RecordingIdGenerator, RecordingStore,
};
use crate::adapters::replaying::{
    ReplayingClock, ReplayingFileSystem, ReplayingIdGenerator, ReplayingStore,
};
use crate::cassette::config::CassetteConfig;
use crate::cassette::session::RecordingSession;
use crate::ports::{Clock, FileSystem, IdGenerator, KeyValueStore, PortError};

/// Bundles one implementation of every port.
///
/// Constructors wire up different adapter families (live, recording,
/// replaying); tests assemble their own with [`ServiceContext::from_parts`].
pub struct ServiceContext {
    /// Clock for timestamps.
    pub clock: Box<dyn Clock>,
    /// Source of candidate task ids.
    pub id_gen: Box<dyn IdGenerator>,
    /// Durable key-value storage for tasks and theme.
    pub storage: Box<dyn KeyValueStore>,
    /// Filesystem for export and import files.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Assembles a context from explicit adapters.
    #[must_use]
    pub fn from_parts(
        clock: Box<dyn Clock>,
        id_gen: Box<dyn IdGenerator>,
        storage: Box<dyn KeyValueStore>,
        fs: Box<dyn FileSystem>,
    ) -> Self {
        Self { clock, id_gen, storage, fs }
    }

    /// Creates a live context storing data under `data_dir`.
    #[must_use]
    pub fn live(data_dir: &Path) -> Self {
        Self {
            clock: Box::new(LiveClock),
            id_gen: Box::new(LiveIdGenerator::new()),
            storage: Box::new(DirectoryStore::new(data_dir)),
            fs: Box::new(LiveFileSystem),
        }
    }

    /// Creates a live context whose port traffic is captured to per-port
    /// cassettes under `<cassette_base>/<timestamp>/`.
    ///
    /// The context must be dropped before calling
    /// [`RecordingSession::finish`].
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette directory cannot be created.
    pub fn recording_at(
        data_dir: &Path,
        cassette_base: &Path,
    ) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new(cassette_base)?;
        let live = Self::live(data_dir);
        let ctx = Self {
            clock: Box::new(RecordingClock::new(live.clock, session.clock.clone())),
            id_gen: Box::new(RecordingIdGenerator::new(live.id_gen, session.id_gen.clone())),
            storage: Box::new(RecordingStore::new(live.storage, session.storage.clone())),
            fs: Box::new(RecordingFileSystem::new(live.fs, session.fs.clone())),
        };
        Ok((ctx, session))
    }

    /// Creates a replaying context from a monolithic cassette file.
    ///
    /// Each port gets its own replayer over the same cassette so per-port
    /// cursors are independent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let load = || CassetteConfig::load_cassette(path);
        Ok(Self {
            clock: Box::new(ReplayingClock::new(load()?)),
            id_gen: Box::new(ReplayingIdGenerator::new(load()?)),
            storage: Box::new(ReplayingStore::new(load()?)),
            fs: Box::new(ReplayingFileSystem::new(load()?)),
        })
    }

    /// Creates a replaying context from per-port cassette files.
    ///
    /// Ports without a configured cassette use an adapter that panics with a
    /// clear message when called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        Ok(Self {
            clock: match replayers.clock {
                Some(r) => Box::new(ReplayingClock::new(r)),
                None => Box::new(PanickingClock),
            },
            id_gen: match replayers.id_gen {
                Some(r) => Box::new(ReplayingIdGenerator::new(r)),
                None => Box::new(PanickingIdGenerator),
            },
            storage: match replayers.storage {
                Some(r) => Box::new(ReplayingStore::new(r)),
                None => Box::new(PanickingStore),
            },
            fs: match replayers.fs {
                Some(r) => Box::new(ReplayingFileSystem::new(r)),
                None => Box::new(PanickingFileSystem),
            },
        })
    }
}

// --- Panicking adapters for unspecified ports ---

struct PanickingClock;
impl Clock for PanickingClock {
    fn now(&self) -> chrono::DateTime<chrono::Utc> {
        panic!("Clock port not configured in CassetteConfig: no cassette loaded for clock");
    }
}

struct PanickingIdGenerator;
impl IdGenerator for PanickingIdGenerator {
    fn generate_id(&self) -> String {
        panic!("IdGenerator port not configured in CassetteConfig: no cassette loaded for id_gen");
    }
}

struct PanickingStore;
impl KeyValueStore for PanickingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, PortError> {
        panic!("KeyValueStore port not configured in CassetteConfig: no cassette loaded for storage");
    }
    fn set(&self, _key: &str, _value: &str) -> Result<(), PortError> {
        panic!("KeyValueStore port not configured in CassetteConfig: no cassette loaded for storage");
    }
    fn remove(&self, _key: &str) -> Result<(), PortError> {
        panic!("KeyValueStore port not configured in CassetteConfig: no cassette loaded for storage");
    }
}

struct PanickingFileSystem;
impl FileSystem for PanickingFileSystem {
    fn read_to_string(&self, _path: &Path) -> Result<String, PortError> {
        panic!("FileSystem port not configured in CassetteConfig: no cassette loaded for fs");
    }
    fn write(&self, _path: &Path, _contents: &str) -> Result<(), PortError> {
        panic!("FileSystem port not configured in CassetteConfig: no cassette loaded for fs");
    }
    fn exists(&self, _path: &Path) -> bool {
        panic!("FileSystem port not configured in CassetteConfig: no cassette loaded for fs");
    }
}
