//! Live adapter for the `IdGenerator` port.

use crate::ports::IdGenerator;
use crate::util::generate_id;

/// Live ID generator producing time-prefixed random ids.
pub struct LiveIdGenerator;

impl LiveIdGenerator {
    /// Creates a new live ID generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiveIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for LiveIdGenerator {
    fn generate_id(&self) -> String {
        generate_id()
    }
}
