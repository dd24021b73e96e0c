// Logging for gstinspect
//
// Log records go to stderr so they never mix with the report on stdout.
// Records are either text lines (`YYYY-MM-DD HH:MM:SS [LEVEL] message`) or
// one JSON object per line, and can additionally be appended to a file with
// its own level.

use anyhow::{Context, Result};
use chrono::Local;
use log::{Level, LevelFilter};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogFormat {
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}. Valid options: text, json", s)),
        }
    }
}

/// JSON log record
#[derive(Debug, Serialize)]
pub struct JsonLogEntry<'a> {
    pub timestamp: String,
    pub level: &'a str,
    pub target: &'a str,
    pub message: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    pub console_level: LevelFilter,
    /// Log file and its level, when file logging is enabled
    pub file: Option<(PathBuf, LevelFilter)>,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            console_level: LevelFilter::Warn,
            file: None,
            format: LogFormat::Text,
        }
    }
}

impl LogConfig {
    /// The most verbose level any destination wants
    pub fn max_level(&self) -> LevelFilter {
        match &self.file {
            Some((_, file_level)) => self.console_level.max(*file_level),
            None => self.console_level,
        }
    }
}

/// Logger writing to stderr and optionally a file
pub struct InspectLogger {
    console_level: LevelFilter,
    file: Option<(Mutex<File>, LevelFilter)>,
    format: LogFormat,
}

impl InspectLogger {
    pub fn new(config: &LogConfig) -> Result<Self> {
        let file = match &config.file {
            Some((path, level)) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("Failed to open log file: {}", path.display()))?;
                Some((Mutex::new(file), *level))
            }
            None => None,
        };

        Ok(Self {
            console_level: config.console_level,
            file,
            format: config.format,
        })
    }

    fn format_timestamp() -> String {
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
    }

    fn format_record(&self, level: Level, target: &str, message: &str) -> String {
        let timestamp = Self::format_timestamp();
        let level = level.as_str();
        match self.format {
            LogFormat::Text => format!("{} [{}] {}", timestamp, level, message),
            LogFormat::Json => {
                let entry = JsonLogEntry {
                    timestamp,
                    level,
                    target,
                    message: message.to_string(),
                };
                serde_json::to_string(&entry)
                    .unwrap_or_else(|e| format!("{{\"level\":\"ERROR\",\"message\":\"unserialisable log record: {}\"}}", e))
            }
        }
    }

    fn file_wants(&self, level: Level) -> bool {
        matches!(&self.file, Some((_, file_level)) if level <= *file_level)
    }
}

impl log::Log for InspectLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.console_level || self.file_wants(metadata.level())
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format_record(record.level(), record.target(), &record.args().to_string());

        if record.level() <= self.console_level {
            let _ = writeln!(io::stderr(), "{}", line);
        }

        if let Some((file, file_level)) = &self.file {
            if record.level() <= *file_level {
                if let Ok(mut file) = file.lock() {
                    if let Err(e) = writeln!(file, "{}", line) {
                        let _ = writeln!(io::stderr(), "File logging error: {}", e);
                    }
                }
            }
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
        if let Some((file, _)) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

/// Install the global logger
pub fn init_logger(config: LogConfig) -> Result<()> {
    let logger = InspectLogger::new(&config)?;
    log::set_boxed_logger(Box::new(logger)).context("Failed to set global logger")?;
    log::set_max_level(config.max_level());
    Ok(())
}

/// Convert string to LevelFilter
pub fn parse_log_level(level_str: &str) -> Result<LevelFilter> {
    match level_str.to_lowercase().as_str() {
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        "off" => Ok(LevelFilter::Off),
        _ => Err(anyhow::anyhow!(
            "Invalid log level: {}. Valid levels: error, warn, info, debug, trace, off",
            level_str
        )),
    }
}
