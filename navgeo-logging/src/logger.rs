//! Console and file logger handle

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use env_logger::fmt::Formatter;
use env_logger::{Target, WriteStyle};
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::config::LoggerConfig;
use crate::error::LoggingError;

/// A configured logger
///
/// Records are always written to stdout and additionally appended to the log
/// file when one was configured. Use the leveled methods to log under the
/// logger's name, or [`Logger::install`] to make it the global `log` backend.
pub struct Logger {
    name: String,
    level: LevelFilter,
    file_path: Option<PathBuf>,
    console: env_logger::Logger,
    file: Option<env_logger::Logger>,
}

impl Logger {
    pub fn from_config(config: &LoggerConfig) -> Result<Self, LoggingError> {
        let console = builder(config.level)
            .target(Target::Stdout)
            .write_style(WriteStyle::Auto)
            .is_test(cfg!(test))
            .build();

        let file_path = config.resolved_file();
        let file = match &file_path {
            Some(path) => {
                let file = open_log_file(path)?;
                Some(
                    builder(config.level)
                        .target(Target::Pipe(Box::new(file)))
                        .write_style(WriteStyle::Never)
                        .build(),
                )
            }
            None => None,
        };

        log::debug!(
            "{}: logging at {} to stdout{}",
            config.name,
            config.level,
            file_path
                .as_ref()
                .map(|p| format!(" and {}", p.display()))
                .unwrap_or_default()
        );

        Ok(Logger {
            name: config.name.clone(),
            level: config.level,
            file_path,
            console,
            file,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Resolved path of the log file, if file logging is enabled
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Register this logger as the global `log` backend
    ///
    /// Fails if another backend has already been installed in this process.
    pub fn install(self) -> Result<(), LoggingError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }

    /// Emit a record tagged with this logger's name
    pub fn emit(&self, level: Level, args: fmt::Arguments<'_>) {
        self.log(
            &Record::builder()
                .args(args)
                .level(level)
                .target(&self.name)
                .build(),
        );
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.emit(Level::Error, format_args!("{message}"));
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.emit(Level::Warn, format_args!("{message}"));
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.emit(Level::Info, format_args!("{message}"));
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.emit(Level::Debug, format_args!("{message}"));
    }

    pub fn trace(&self, message: impl fmt::Display) {
        self.emit(Level::Trace, format_args!("{message}"));
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.console.log(record);
        if let Some(file) = &self.file {
            file.log(record);
        }
    }

    fn flush(&self) {
        self.console.flush();
        if let Some(file) = &self.file {
            file.flush();
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("file_path", &self.file_path)
            .finish()
    }
}

fn builder(level: LevelFilter) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).format(format_record);
    builder
}

/// `2024-05-01 12:00:00,123 - name - LEVEL - message`
fn format_record(buf: &mut Formatter, record: &Record<'_>) -> io::Result<()> {
    writeln!(
        buf,
        "{} - {} - {} - {}",
        Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
        record.target(),
        record.level(),
        record.args()
    )
}

fn open_log_file(path: &Path) -> Result<fs::File, LoggingError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::OpenFile {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{configure_logger, LoggerConfig};

    fn file_config(dir: &Path, file: &str, level: LevelFilter) -> LoggerConfig {
        LoggerConfig {
            name: "tracker".to_string(),
            file: Some(PathBuf::from(file)),
            level,
            log_dir: dir.join("logs"),
        }
    }

    #[test]
    fn test_console_only_accessors() {
        let logger = configure_logger("console", None, LevelFilter::Warn).unwrap();
        assert_eq!(logger.name(), "console");
        assert_eq!(logger.level(), LevelFilter::Warn);
        assert!(logger.file_path().is_none());
        logger.warn("console only");
    }

    #[test]
    fn test_creates_log_dir_and_writes_file() {
        let tmp = tempfile::tempdir().unwrap();
        let logger = Logger::from_config(&file_config(tmp.path(), "run.log", LevelFilter::Info))
            .unwrap();

        let path = tmp.path().join("logs").join("run.log");
        assert_eq!(logger.file_path(), Some(path.as_path()));

        logger.info("CPA 0.42 nm");
        logger.flush();

        let contents = fs::read_to_string(&path).unwrap();
        let line = contents.lines().next().unwrap();
        assert!(line.ends_with(" - tracker - INFO - CPA 0.42 nm"), "{line}");
        // 2024-05-01 12:00:00,123
        assert_eq!(line.find(" - "), Some(23));
    }

    #[test]
    fn test_level_filtering() {
        let tmp = tempfile::tempdir().unwrap();
        let logger = Logger::from_config(&file_config(tmp.path(), "run.log", LevelFilter::Warn))
            .unwrap();

        logger.debug("hidden");
        logger.info("hidden");
        logger.warn("shown");
        logger.error("shown too");
        logger.flush();

        let contents = fs::read_to_string(logger.file_path().unwrap()).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(!contents.contains("hidden"));
        assert!(contents.contains("WARN - shown"));
        assert!(contents.contains("ERROR - shown too"));
    }

    #[test]
    fn test_reconfigure_appends_without_duplicates() {
        let tmp = tempfile::tempdir().unwrap();
        let config = file_config(tmp.path(), "run.log", LevelFilter::Info);

        Logger::from_config(&config).unwrap().info("first");
        let logger = Logger::from_config(&config).unwrap();
        logger.info("second");
        logger.flush();

        let contents = fs::read_to_string(logger.file_path().unwrap()).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("first"));
        assert!(lines[1].ends_with("second"));
    }

    #[test]
    fn test_absolute_file_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("abs.log");

        let logger = configure_logger("abs", Some(&path), LevelFilter::Debug).unwrap();
        assert_eq!(logger.file_path(), Some(path.as_path()));

        logger.debug("written");
        logger.flush();
        assert!(fs::read_to_string(&path).unwrap().contains("abs - DEBUG - written"));
    }

    #[test]
    fn test_open_failure() {
        let tmp = tempfile::tempdir().unwrap();
        // A directory cannot be opened as the log file
        let dir = tmp.path().join("logs").join("taken");
        fs::create_dir_all(&dir).unwrap();

        let err = Logger::from_config(&file_config(tmp.path(), "taken", LevelFilter::Info))
            .unwrap_err();
        assert!(matches!(err, LoggingError::OpenFile { .. }), "{err:?}");
    }
}
