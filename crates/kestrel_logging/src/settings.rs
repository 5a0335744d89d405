use toml::{Table, Value};

use crate::{LogCategory, Logger, LogLevel, log_error, log_warning};

const LOG_CAT : LogCategory = LogCategory::new_with_sub("Logging", "Settings");

/// Logger settings, loaded from the `[log]` table of a toml document
///
/// ```toml
/// [log]
/// level = "verbose"
/// console = true
/// always-flush = false
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoggerSettings {
    /// Maximum level that will be written
    pub max_level      : LogLevel,
    /// Echo messages to stdout
    pub log_to_console : bool,
    /// Flush after every message instead of batching
    pub always_flush   : bool,
}

impl LoggerSettings {
    pub fn load(toml: &str) -> Option<LoggerSettings> {
        let toml = match toml.parse::<Table>() {
            Ok(toml) => toml,
            Err(err) => {
                log_error!(LOG_CAT, Self::load, "Failed to parse logger settings, err: {err}");
                return None;
            }
        };
        let mut settings = LoggerSettings::default();

        if let Some(Value::Table(log_table)) = toml.get("log") {
            if let Some(Value::String(level)) = log_table.get("level") {
                match LogLevel::from_name(level) {
                    Some(level) => settings.max_level = level,
                    None => log_warning!(LOG_CAT, "Unknown log level '{level}', keeping '{:?}'", settings.max_level),
                }
            }
            if let Some(Value::Boolean(console)) = log_table.get("console") {
                settings.log_to_console = *console;
            }
            if let Some(Value::Boolean(always_flush)) = log_table.get("always-flush") {
                settings.always_flush = *always_flush;
            }
        }

        Some(settings)
    }

    /// Apply the settings to a logger
    pub fn apply(&self, logger: &Logger) {
        logger.set_max_level(self.max_level);
        logger.set_log_to_console(self.log_to_console);
        logger.set_always_flush(self.always_flush);
    }
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            max_level: LogLevel::Info,
            log_to_console: true,
            always_flush: false,
        }
    }
}
