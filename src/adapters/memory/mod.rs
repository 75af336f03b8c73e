//! In-memory adapters for tests and embedding.
//!
//! Each adapter is a cheap handle over shared state: clone it before boxing
//! it into a `ServiceContext` and the clone can still steer or inspect it.

pub mod clock;
pub mod filesystem;
pub mod id_gen;
pub mod storage;

pub use clock::FixedClock;
pub use filesystem::MemoryFileSystem;
pub use id_gen::SequentialIdGenerator;
pub use storage::MemoryStore;
