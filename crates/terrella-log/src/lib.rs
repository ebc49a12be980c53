//! Structured logging for the globe core.
//!
//! Provides structured, span-based, filterable logging via the `tracing`
//! ecosystem. Supports console output with uptime timestamps and module
//! paths, plus JSON file logging in debug builds for post-mortem analysis.
//! Library crates log through the `log` facade and are picked up by the
//! same subscriber. Integrates with the configuration system to allow
//! runtime log level control.

use std::path::Path;

use terrella_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber for the globe core.
///
/// Sets up structured logging with:
/// - Console output with uptime timestamps, module paths, and severity levels
/// - JSON file logging in debug builds (optional)
/// - Environment-based filtering (respects RUST_LOG)
/// - Integration with config system log_level setting
///
/// # Arguments
///
/// * `log_dir` - Optional directory for JSON log files (debug builds only)
/// * `debug_build` - Whether this is a debug build (enables file logging)
/// * `config` - Optional configuration to use for log level override
///
/// # Examples
///
/// ```no_run
/// use terrella_log::init_logging;
/// use terrella_config::Config;
///
/// // Basic initialization
/// init_logging(None, false, None);
///
/// // With file logging in debug mode
/// let log_dir = std::path::Path::new("./logs");
/// init_logging(Some(log_dir), true, None);
///
/// // With config override
/// let config = Config::default();
/// init_logging(None, false, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    // Determine the filter string
    let filter_str = if let Some(config) = config {
        if !config.debug.log_level.is_empty() {
            config.debug.log_level.clone()
        } else {
            "info".to_string()
        }
    } else {
        "info".to_string()
    };

    // Base filter: info by default, overridable via RUST_LOG env var
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    // Console layer: human-readable format with timestamps
    let console_layer = fmt::layer()
        .with_target(true) // Show module path
        .with_thread_ids(false) // The core runs on one thread
        .with_thread_names(false)
        .with_level(true) // Show log level
        .with_timer(fmt::time::uptime()); // Time since session start

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    // In debug builds, also log to a file for post-mortem analysis
    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join("terrella.log"))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false) // No ANSI color codes in file output
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json(); // Structured JSON for machine parsing

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// Create an `EnvFilter` with the default filter string.
///
/// Returns a filter that enables `info` level for all targets. Useful for
/// testing and for getting consistent default behavior.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new("info")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        let filter = default_env_filter();
        let filter_str = format!("{}", filter);
        assert!(filter_str.contains("info"));
    }

    #[test]
    fn test_subsystem_filter() {
        let filter = EnvFilter::new("info,terrella_solar=debug");

        let filter_str = format!("{}", filter);
        assert!(filter_str.contains("terrella_solar=debug"));
        assert!(filter_str.contains("info"));
    }

    #[test]
    fn test_env_filter_parsing() {
        // Test various RUST_LOG strings parse without error
        let valid_filters = [
            "info",
            "debug,terrella_session=trace",
            "warn,terrella_clocks=debug,terrella_solar=trace",
            "error",
        ];

        for filter_str in &valid_filters {
            let result = EnvFilter::try_from(*filter_str);
            assert!(result.is_ok(), "Failed to parse filter: {}", filter_str);
        }
    }

    #[test]
    fn test_config_level_feeds_filter() {
        let mut config = Config::default();
        config.debug.log_level = "terrella_session=debug".to_string();
        // The same string the init path would choose must parse.
        let filter = EnvFilter::new(&config.debug.log_level);
        assert!(format!("{}", filter).contains("terrella_session=debug"));
    }

    #[test]
    fn test_file_logger_creation() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path();

        std::fs::create_dir_all(log_path).unwrap();

        let log_file_path = log_path.join("terrella.log");
        assert_eq!(log_file_path.file_name().unwrap(), "terrella.log");
    }

    #[test]
    fn test_json_layer_output_is_parseable() {
        // A JSON log line in the file layer's shape must deserialize.
        let sample = r#"{"timestamp":"0.003021","level":"INFO","fields":{"message":"session ready"},"target":"terrella_demo"}"#;
        let value: serde_json::Value = serde_json::from_str(sample).unwrap();
        assert_eq!(value["level"], "INFO");
        assert_eq!(value["target"], "terrella_demo");
    }
}
