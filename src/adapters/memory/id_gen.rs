//! Predictable id sequence.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::ports::IdGenerator;

/// Yields `<prefix>1`, `<prefix>2`, ... in order.
#[derive(Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: Arc<AtomicU64>,
}

impl SequentialIdGenerator {
    /// Creates a generator whose ids start with `prefix`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), next: Arc::new(AtomicU64::new(1)) }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("task-")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        format!("{}{n}", self.prefix)
    }
}
