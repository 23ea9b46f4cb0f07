mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

#[cfg(test)]
mod tests;

const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const SESSION_FILENAME: &str = "session.json";
