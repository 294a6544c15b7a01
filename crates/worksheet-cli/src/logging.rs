//! Logging setup for the `worksheet` binary.
//!
//! Output goes to stderr so it never mixes with transformed text on stdout.
//! The filter comes from `RUST_LOG`, falling back to the configured default.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default log level filter, used when `RUST_LOG` is unset
    pub default_filter: String,

    /// Whether to include file/line information in logs
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_filter: "warn".to_string(),
            include_location: cfg!(debug_assertions),
        }
    }
}

impl LoggingConfig {
    /// Configuration for `--verbose` runs
    pub fn verbose() -> Self {
        Self {
            default_filter: "debug,worksheet_editor=debug".to_string(),
            ..Self::default()
        }
    }
}

/// Install the global subscriber.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(config.include_location)
        .with_line_number(config.include_location);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
