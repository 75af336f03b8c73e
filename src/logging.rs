//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Picks the filter directive: explicit value, then `RUST_LOG`, then `warn`.
#[must_use]
pub fn resolve_filter(explicit: Option<&str>) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| std::env::var(EnvFilter::DEFAULT_ENV).ok())
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Installs a stderr `fmt` subscriber. Safe to call more than once; only
/// the first call takes effect.
pub fn init(explicit: Option<&str>) {
    let filter = EnvFilter::try_new(resolve_filter(explicit))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        assert_eq!(resolve_filter(Some("taskmaster=trace")), "taskmaster=trace");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(Some("debug"));
        init(None);
    }
}
