//! Identifier generation.

use chrono::Utc;
use uuid::Uuid;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Renders `n` in lowercase base 36.
#[must_use]
pub fn to_base36(mut n: u128) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[usize::try_from(n % 36).unwrap_or_default()]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Generates a fresh id: base-36 epoch milliseconds followed by eleven
/// random base-36 characters.
#[must_use]
pub fn generate_id() -> String {
    let millis = u128::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
    let random = to_base36(Uuid::new_v4().as_u128());
    let suffix: String = random.chars().take(11).collect();
    format!("{}{suffix}", to_base36(millis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base36_digits() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_295), "zz");
    }

    #[test]
    fn generated_ids_are_distinct() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(a.len() > 11);
    }
}
