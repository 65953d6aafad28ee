use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError,
    ConfigErrorResult, LoggingConfig, ServerConfig, StorageConfig,
};

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use error_location::ErrorLocation;
use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for PC_CONFIG_DIR env var, else use ./.pc/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PC_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Get the config directory.
    /// Priority: PC_CONFIG_DIR env var > ./.pc/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.storage.validate()?;
        self.auth.validate()?;
        Ok(())
    }

    /// Absolute path of the record store root
    pub fn data_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.storage.data_dir))
    }

    /// Absolute path of the key file directory
    pub fn keys_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.auth.keys_dir))
    }

    /// Absolute path of the log file, if file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (cors: {})",
            self.server.host,
            self.server.port,
            self.server.cors_allowed_origins.join(", ")
        );
        info!("  storage: {}", self.storage.data_dir);
        info!(
            "  auth: ttl={}m, leeway={}s, keys={}, jwt_secret={}, encryption_key={}",
            self.auth.token_ttl_minutes,
            self.auth.leeway_secs,
            self.auth.keys_dir,
            source_label(self.auth.jwt_secret.is_some()),
            source_label(self.auth.encryption_key.is_some()),
        );
        info!(
            "  logging: {} (colored: {})",
            self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        override_from_env("PC_SERVER_HOST", &mut self.server.host, Some);
        override_from_env("PC_SERVER_PORT", &mut self.server.port, parsed);
        override_from_env(
            "PC_SERVER_CORS_ORIGINS",
            &mut self.server.cors_allowed_origins,
            comma_list,
        );

        override_from_env("PC_STORAGE_DATA_DIR", &mut self.storage.data_dir, Some);

        override_from_env("PC_AUTH_JWT_SECRET", &mut self.auth.jwt_secret, |v| {
            Some(Some(v))
        });
        override_from_env("PC_AUTH_ENCRYPTION_KEY", &mut self.auth.encryption_key, |v| {
            Some(Some(v))
        });
        override_from_env("PC_AUTH_KEYS_DIR", &mut self.auth.keys_dir, Some);
        override_from_env(
            "PC_AUTH_TOKEN_TTL_MINUTES",
            &mut self.auth.token_ttl_minutes,
            parsed,
        );
        override_from_env("PC_AUTH_LEEWAY_SECS", &mut self.auth.leeway_secs, parsed);

        override_from_env("PC_LOG_LEVEL", &mut self.logging.level, parsed);
        override_from_env("PC_LOG_COLORED", &mut self.logging.colored, |v| {
            Some(v == "true" || v == "1")
        });
        override_from_env("PC_LOG_FILE", &mut self.logging.file, |v| Some(Some(v)));
    }
}

fn source_label(configured: bool) -> &'static str {
    if configured { "config" } else { "key file" }
}

/// Replace `target` with the converted value of `var`, if set.
/// A value that fails to convert is logged and ignored.
fn override_from_env<T>(var: &str, target: &mut T, convert: impl FnOnce(String) -> Option<T>) {
    let Ok(raw) = std::env::var(var) else {
        return;
    };
    match convert(raw) {
        Some(value) => *target = value,
        None => warn!("Ignoring unparseable value in {var}"),
    }
}

fn parsed<T: FromStr>(raw: String) -> Option<T> {
    raw.trim().parse().ok()
}

fn comma_list(raw: String) -> Option<Vec<String>> {
    Some(
        raw.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
    )
}
