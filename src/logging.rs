//! Diagnostic logging using tracing.
//!
//! Everything goes to stderr; the app writes nothing to disk. The filter comes
//! from `log_level` in `config.json` and defaults to `alert_forge=info,warn`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::DEFAULT_LOG_FILTER;

/// Build the filter for a configured level, falling back to the default on a bad directive.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init(level: &str) {
    let result = tracing_subscriber::registry()
        .with(build_filter(level))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_timer(fmt::time::ChronoLocal::new("%H:%M:%S%.3f".to_string())),
        )
        .try_init();

    match result {
        Ok(()) => tracing::debug!("Logging initialized with filter `{}`", level),
        Err(e) => eprintln!("Logging already initialized: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_filter_is_kept() {
        let filter = build_filter("alert_forge=debug");
        assert_eq!(filter.to_string(), "alert_forge=debug");
    }

    #[test]
    fn test_invalid_filter_falls_back() {
        let filter = build_filter("alert_forge=notalevel");
        assert_eq!(filter.to_string(), EnvFilter::new(DEFAULT_LOG_FILTER).to_string());
    }
}
