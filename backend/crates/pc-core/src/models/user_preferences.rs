use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::panic::Location;

use serde::{Deserialize, Serialize};

pub const MAX_COOKIE_PREFERENCE_LENGTH: usize = 64;

const DEFAULT_COOKIE_PREFERENCE: &str = "essential";

/// Communication and cookie consent choices for one identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub marketing_emails: bool,
    pub product_updates: bool,
    pub security_alerts: bool,
    pub analytics_consent: bool,
    pub personalization: bool,
    /// Free-form banner choice, e.g. "essential", "all" or "custom"
    pub cookie_preference: String,
    pub essential_cookies: bool,
    pub analytics_cookies: bool,
    pub marketing_cookies: bool,
    pub functional_cookies: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            marketing_emails: false,
            product_updates: true,
            security_alerts: true,
            analytics_consent: false,
            personalization: false,
            cookie_preference: String::from(DEFAULT_COOKIE_PREFERENCE),
            essential_cookies: true,
            analytics_cookies: false,
            marketing_cookies: false,
            functional_cookies: false,
        }
    }
}

impl UserPreferences {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        let cookie_preference = self.cookie_preference.trim();

        if cookie_preference.is_empty() {
            return Err(CoreError::Validation {
                field: "cookie_preference".to_string(),
                message: "cookie_preference cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if cookie_preference.len() > MAX_COOKIE_PREFERENCE_LENGTH {
            return Err(CoreError::Validation {
                field: "cookie_preference".to_string(),
                message: format!(
                    "cookie_preference exceeds {MAX_COOKIE_PREFERENCE_LENGTH} characters"
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
