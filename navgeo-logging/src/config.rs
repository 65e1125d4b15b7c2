//! Logger settings

use std::path::{Path, PathBuf};

use chrono::Local;
use log::LevelFilter;
use serde::Deserialize;

/// Directory that relative log file names are placed in
pub const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Name shown in every line emitted through the logger handle
    pub name: String,
    /// Optional log file. Relative paths end up inside `log_dir`.
    pub file: Option<PathBuf>,
    pub level: LevelFilter,
    pub log_dir: PathBuf,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            name: "navgeo".to_string(),
            file: None,
            level: LevelFilter::Info,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

impl LoggerConfig {
    /// Config with a file named `{prefix}_{YYYYmmdd_HHMMSS}.log` (local time)
    pub fn timestamped(name: &str, prefix: &str, level: LevelFilter) -> Self {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        LoggerConfig {
            name: name.to_string(),
            file: Some(PathBuf::from(format!("{prefix}_{timestamp}.log"))),
            level,
            ..LoggerConfig::default()
        }
    }

    /// Where the log file will be written, if any
    ///
    /// Absolute paths and paths already below `log_dir` are kept as they are.
    pub fn resolved_file(&self) -> Option<PathBuf> {
        self.file
            .as_deref()
            .map(|file| resolve_log_path(&self.log_dir, file))
    }
}

fn resolve_log_path(log_dir: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() || file.starts_with(log_dir) {
        file.to_path_buf()
    } else {
        log_dir.join(file)
    }
}
