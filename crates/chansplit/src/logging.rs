//! Logging initialization.
//!
//! Uses the `tracing` ecosystem with either human-readable or JSON output.
//! Logs always go to stderr; stdout is reserved for reports.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging from the `[logging]` config section.
///
/// `verbose` forces debug level and `json_logs` forces JSON output. The
/// `RUST_LOG` environment variable, when set, overrides the level.
pub fn init_from_config(config: &chansplit_core::Config, verbose: bool, json_logs: bool) {
    let level = default_level(&config.logging.level, verbose);
    let json = json_logs || config.logging.format == "json";

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr)
                    .with_ansi(true),
            )
            .init();
    }
}

/// Resolve the filter level from the config value and the `-v` flag.
fn default_level(configured: &str, verbose: bool) -> &'static str {
    if verbose {
        return "debug";
    }
    match configured.to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_forces_debug() {
        assert_eq!(default_level("error", true), "debug");
    }

    #[test]
    fn configured_level_is_respected() {
        assert_eq!(default_level("TRACE", false), "trace");
        assert_eq!(default_level("warn", false), "warn");
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(default_level("loud", false), "info");
    }
}
