use crate::LogLevel;

use serde::Deserialize;

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Optional log file path, relative to the config directory.
    /// None = stderr output.
    pub file: Option<String>,
}
