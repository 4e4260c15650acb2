//! Utility modules for dirlist

pub mod logging;

pub use logging::{init_from_env, init_logging, LoggingConfig};
