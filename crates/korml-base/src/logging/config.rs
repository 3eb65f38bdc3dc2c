use crate::logging::formatter::LogFormat;
use std::path::PathBuf;

/// Environment variable naming a log file
pub const LOG_FILE_ENV: &str = "KORML_LOG_FILE";
/// Environment variable selecting `text` or `json` output
pub const LOG_FORMAT_ENV: &str = "KORML_LOG_FORMAT";

/// Configuration for logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Path to log file (None = no file logging)
    pub file: Option<PathBuf>,
    /// Log to console (true) or only to file (false)
    pub console: bool,
    /// Log format (text or json)
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            file: std::env::var(LOG_FILE_ENV).ok().map(PathBuf::from),
            console: true,
            format: format_from_env(),
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new(level: String, file: Option<PathBuf>, console: bool, format: LogFormat) -> Self {
        Self {
            level,
            file,
            console,
            format,
        }
    }
}

/// Unset or unparsable values fall back to text
pub(crate) fn format_from_env() -> LogFormat {
    std::env::var(LOG_FORMAT_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}
