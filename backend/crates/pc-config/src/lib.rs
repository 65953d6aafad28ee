mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult, ConfigSection};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use storage_config::StorageConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_CORS_ORIGIN: &str = "*";

const DEFAULT_DATA_DIRECTORY: &str = "data";

const DEFAULT_KEYS_DIRECTORY: &str = "keys";
const DEFAULT_TOKEN_TTL_MINUTES: u64 = 30;
const MAX_TOKEN_TTL_MINUTES: u64 = 24 * 60;
const DEFAULT_LEEWAY_SECS: u64 = 0;
const MAX_LEEWAY_SECS: u64 = 300;
const MIN_JWT_SECRET_LENGTH: usize = 32;
const ENCRYPTION_KEY_LENGTH: usize = 32;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const CONFIG_DIR_ENV: &str = "PC_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".pc";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Reject absolute paths and parent-directory escapes for config-relative dirs
fn ensure_relative(field: &str, value: &str) -> ConfigErrorResult<()> {
    if std::path::Path::new(value).is_absolute() || value.contains("..") {
        return Err(ConfigError::config(format!(
            "{field} must be relative and cannot contain '..', got '{value}'"
        )));
    }
    if value.trim().is_empty() {
        return Err(ConfigError::config(format!("{field} cannot be empty")));
    }
    Ok(())
}
