//! Structured logging setup for dirlist
//!
//! Logs go to stderr through the `tracing` ecosystem so that stdout carries
//! nothing but the listing table. The default level is `warn`; per-entry skips
//! and listing summaries are emitted at `debug`.
//!
//! # Example
//!
//! ```no_run
//! use dirlist::util::logging;
//!
//! // With environment: DIRLIST_LOG_LEVEL=debug
//! logging::init_from_env();
//!
//! tracing::debug!(path = "/tmp", "Listing directory");
//! ```

use std::env;
use std::io;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

pub const LOG_LEVEL_ENV: &str = "DIRLIST_LOG_LEVEL";
pub const LOG_JSON_ENV: &str = "DIRLIST_LOG_JSON";

const DEFAULT_LEVEL: Level = Level::WARN;

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Use JSON output format
    pub use_json: bool,

    /// Include the module target (e.g., dirlist::listing) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,

    /// Include thread ID and name in logs
    pub include_thread_ids: bool,
}

impl Default for LoggingConfig {
    /// Warnings and errors only, plain text, with module targets
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            use_json: false,
            include_target: true,
            include_location: false,
            include_thread_ids: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// JSON output with source locations, for collection by log pipelines
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            use_json: true,
            include_target: true,
            include_location: true,
            include_thread_ids: true,
        }
    }

    /// Builds a configuration from `DIRLIST_LOG_LEVEL` and `DIRLIST_LOG_JSON`
    pub fn from_env() -> Self {
        Self::from_values(
            env::var(LOG_LEVEL_ENV).ok().as_deref(),
            env::var(LOG_JSON_ENV).ok().as_deref(),
        )
    }

    fn from_values(level: Option<&str>, json: Option<&str>) -> Self {
        let level = level.map(parse_level).unwrap_or(DEFAULT_LEVEL);
        let use_json = json
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            level,
            use_json,
            ..Default::default()
        }
    }
}

/// Parses a log level from a string (case-insensitive).
///
/// Unknown names fall back to the default level with a note on stderr.
///
/// ```
/// use dirlist::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("INFO"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to {}. Valid levels: trace, debug, info, warn, error",
                level_str, DEFAULT_LEVEL
            );
            DEFAULT_LEVEL
        }
    }
}

/// Installs the global subscriber. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();

        // RUST_LOG wins when set
        if env::var("RUST_LOG").is_err() {
            if let Ok(directive) = format!("dirlist={}", config.level).parse() {
                filter = filter.add_directive(directive);
            }
        }

        let layer = fmt::layer()
            .with_writer(io::stderr)
            .with_target(config.include_target)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_thread_ids(config.include_thread_ids)
            .with_thread_names(config.include_thread_ids);

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.json())
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .init();
        }
    });
}

pub fn init_from_env() {
    init_logging(LoggingConfig::from_env());
}
