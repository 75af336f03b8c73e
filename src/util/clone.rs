//! Detached copies through the storage encoding.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Copies a value by encoding it to JSON and decoding it back, so the copy
/// holds exactly what a persistence round trip would keep.
///
/// # Errors
///
/// Returns an error if the value cannot be encoded or decoded.
pub fn deep_clone<T: Serialize + DeserializeOwned>(value: &T) -> Result<T, serde_json::Error> {
    serde_json::from_value(serde_json::to_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::deep_clone;
    use crate::task::{Priority, Task, TaskId};
    use chrono::{TimeZone, Utc};

    #[test]
    fn copy_is_equal_and_independent() {
        let original = Task::new(
            TaskId::from("x1"),
            "Water plants",
            Priority::Low,
            Utc.with_ymd_and_hms(2024, 2, 2, 2, 2, 2).unwrap(),
        );
        let mut copy = deep_clone(&original).unwrap();
        assert_eq!(copy, original);
        copy.title.push('!');
        assert_eq!(original.title, "Water plants");
    }
}
