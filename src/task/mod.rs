//! Task data model.
//!
//! Defines the Rust types that mirror the persisted task JSON schema.
//! These are serialized/deserialized by the store and owned by the manager.

mod filter;
mod id;
mod priority;
mod record;
pub mod timestamp;

pub use filter::StatusFilter;
pub use id::TaskId;
pub use priority::Priority;
pub use record::Task;
