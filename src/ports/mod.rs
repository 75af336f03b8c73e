//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the task core and something it
//! does not own (time, id entropy, durable key-value storage, files).
//! Implementations live in `src/adapters/`.

pub mod clock;
pub mod filesystem;
pub mod id_gen;
pub mod storage;

pub use clock::Clock;
pub use filesystem::FileSystem;
pub use id_gen::IdGenerator;
pub use storage::KeyValueStore;

/// Error type shared by fallible port methods.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;
