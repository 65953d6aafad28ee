use chrono::Duration;

const DEFAULT_TTL_MINUTES: i64 = 30;

/// Token lifetime settings, converted from the server configuration
#[derive(Debug, Clone, Copy)]
pub struct TokenConfig {
    pub ttl: Duration,
    pub leeway_secs: u64,
}

impl TokenConfig {
    pub fn from_minutes(ttl_minutes: u64, leeway_secs: u64) -> Self {
        Self {
            ttl: Duration::minutes(i64::try_from(ttl_minutes).unwrap_or(DEFAULT_TTL_MINUTES)),
            leeway_secs,
        }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::minutes(DEFAULT_TTL_MINUTES),
            leeway_secs: 0,
        }
    }
}
