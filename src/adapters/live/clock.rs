//! Live clock backed by the system time.

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;

/// Reads the system clock on every call.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readings_are_monotonic_enough() {
        let first = LiveClock.now();
        let second = LiveClock.now();
        assert!(second >= first);
        assert!((Utc::now() - second).num_seconds() < 5);
    }
}
