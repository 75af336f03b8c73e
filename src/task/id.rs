//! Task identifiers.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique key of a task within the collection.
///
/// Persisted data carries either numeric ids (millisecond timestamps) or
/// generated string ids, so both shapes are accepted and written back as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    /// Integer id.
    Number(i64),
    /// Text id.
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for TaskId {
    type Err = Infallible;

    /// All-digit text becomes a numeric id; anything else is a text id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = s.parse::<i64>() {
                return Ok(Self::Number(n));
            }
        }
        Ok(Self::Text(s.to_string()))
    }
}

impl From<i64> for TaskId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_parse_as_number() {
        assert_eq!("1700000000000".parse::<TaskId>().unwrap(), TaskId::Number(1_700_000_000_000));
    }

    #[test]
    fn other_text_parses_as_text() {
        assert_eq!("lq3k9xabc".parse::<TaskId>().unwrap(), TaskId::Text("lq3k9xabc".into()));
        assert_eq!("-5".parse::<TaskId>().unwrap(), TaskId::Text("-5".into()));
    }

    #[test]
    fn json_accepts_both_shapes() {
        let ids: Vec<TaskId> = serde_json::from_str(r#"[17, "abc"]"#).unwrap();
        assert_eq!(ids, vec![TaskId::Number(17), TaskId::Text("abc".into())]);
        assert_eq!(serde_json::to_string(&ids).unwrap(), r#"[17,"abc"]"#);
    }
}
