//! Human-readable durations.

/// Formats a millisecond span largest unit first: `"2d 3h"`, `"4h 10m"`,
/// `"1m 30s"`, `"12s"`. Zero or negative spans render as `"N/A"`.
#[must_use]
pub fn format_duration(ms: i64) -> String {
    if ms <= 0 {
        return "N/A".to_string();
    }

    let seconds = ms / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{days}d {}h", hours % 24)
    } else if hours > 0 {
        format!("{hours}h {}m", minutes % 60)
    } else if minutes > 0 {
        format!("{minutes}m {}s", seconds % 60)
    } else {
        format!("{seconds}s")
    }
}
