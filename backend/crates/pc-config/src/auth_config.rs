use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_KEYS_DIRECTORY, DEFAULT_LEEWAY_SECS,
    DEFAULT_TOKEN_TTL_MINUTES, ENCRYPTION_KEY_LENGTH, MAX_LEEWAY_SECS, MAX_TOKEN_TTL_MINUTES,
    MIN_JWT_SECRET_LENGTH, ensure_relative,
};

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use serde::Deserialize;

/// Token and at-rest encryption settings.
///
/// `jwt_secret` and `encryption_key` are optional: when unset, the key files
/// under `keys_dir` are used, and generated on first start if missing.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: Option<String>,
    /// URL-safe base64 of a 32-byte AES-256 key
    pub encryption_key: Option<String>,
    pub keys_dir: String,
    pub token_ttl_minutes: u64,
    /// Clock skew tolerated when checking `exp`
    pub leeway_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            encryption_key: None,
            keys_dir: String::from(DEFAULT_KEYS_DIRECTORY),
            token_ttl_minutes: DEFAULT_TOKEN_TTL_MINUTES,
            leeway_secs: DEFAULT_LEEWAY_SECS,
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field(
                "encryption_key",
                &self.encryption_key.as_ref().map(|_| "<redacted>"),
            )
            .field("keys_dir", &self.keys_dir)
            .field("token_ttl_minutes", &self.token_ttl_minutes)
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.token_ttl_minutes == 0 || self.token_ttl_minutes > MAX_TOKEN_TTL_MINUTES {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_minutes must be 1-{}, got {}",
                MAX_TOKEN_TTL_MINUTES, self.token_ttl_minutes
            )));
        }

        if self.leeway_secs > MAX_LEEWAY_SECS {
            return Err(ConfigError::auth(format!(
                "auth.leeway_secs must be at most {}, got {}",
                MAX_LEEWAY_SECS, self.leeway_secs
            )));
        }

        if let Some(ref secret) = self.jwt_secret
            && secret.len() < MIN_JWT_SECRET_LENGTH
        {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {MIN_JWT_SECRET_LENGTH} characters"
            )));
        }

        if let Some(ref key) = self.encryption_key {
            let decoded = URL_SAFE.decode(key.trim()).map_err(|e| {
                ConfigError::auth(format!(
                    "auth.encryption_key must be URL-safe base64: {e}"
                ))
            })?;
            if decoded.len() != ENCRYPTION_KEY_LENGTH {
                return Err(ConfigError::auth(format!(
                    "auth.encryption_key must decode to {} bytes, got {}",
                    ENCRYPTION_KEY_LENGTH,
                    decoded.len()
                )));
            }
        }

        ensure_relative("auth.keys_dir", &self.keys_dir)
    }
}
