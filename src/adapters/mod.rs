//! Port implementations.
//!
//! - `live`: real system clock, random ids, directory-backed storage, disk files.
//! - `memory`: deterministic in-process stand-ins.
//! - `recording`: wrappers that capture every call into a cassette.
//! - `replaying`: adapters that serve a cassette back.

pub mod live;
pub mod memory;
pub mod recording;
pub mod replaying;
