//! Logger configuration for navgeo applications.
//!
//! Builds a `log` backend that always writes to stdout and, when a file is
//! configured, also appends to a log file. Every line has the form
//!
//! ```text
//! 2024-05-01 12:00:00,123 - tracker - INFO - CPA 0.42 nm in 12 min
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use log::LevelFilter;
//! use navgeo_logging::{configure_logger, timestamped_logger};
//!
//! // Console only
//! let logger = configure_logger("tracker", None, LevelFilter::Info)?;
//! logger.info("tracking started");
//!
//! // Console plus logs/collision_20240501_120000.log, installed as the global backend
//! timestamped_logger("tracker", "collision", LevelFilter::Debug)?.install()?;
//! log::debug!("now going to the file as well");
//! ```

mod config;
mod error;
mod logger;

pub use config::{LoggerConfig, DEFAULT_LOG_DIR};
pub use error::LoggingError;
pub use logger::Logger;

use std::path::Path;

use log::LevelFilter;

/// Configure a logger writing to the console and, if `file` is given, to
/// that file inside [`DEFAULT_LOG_DIR`]
pub fn configure_logger(
    name: &str,
    file: Option<&Path>,
    level: LevelFilter,
) -> Result<Logger, LoggingError> {
    let config = LoggerConfig {
        name: name.to_string(),
        file: file.map(Path::to_path_buf),
        level,
        ..LoggerConfig::default()
    };
    Logger::from_config(&config)
}

/// Configure a logger whose file is named `{prefix}_{YYYYmmdd_HHMMSS}.log`
pub fn timestamped_logger(
    name: &str,
    prefix: &str,
    level: LevelFilter,
) -> Result<Logger, LoggingError> {
    Logger::from_config(&LoggerConfig::timestamped(name, prefix, level))
}
