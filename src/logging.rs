//! Logger setup.
//!
//! Everything logs through the `log` facade; this only wires up `env_logger`.
use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "hello_triangle=debug").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    /// Where records go. Stdout by default, so setup diagnostics land there.
    pub target: LogTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    Stderr,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            target: LogTarget::Stdout,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once. Later calls are ignored.
///
/// Without an explicit filter, `RUST_LOG` is honored, falling back to `info`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(config.write_style);
        builder.target(match config.target {
            LogTarget::Stdout => env_logger::Target::Stdout,
            LogTarget::Stderr => env_logger::Target::Stderr,
        });

        // another logger may already be installed (tests); keep it
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}
