use pc_core::UserPreferences;

use serde::Deserialize;

/// Body of `PUT /preferences`.
///
/// Every field is required and unknown fields are rejected; a client must
/// always send the complete preference set.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePreferencesRequest {
    pub marketing_emails: bool,
    pub product_updates: bool,
    pub security_alerts: bool,
    pub analytics_consent: bool,
    pub personalization: bool,
    pub cookie_preference: String,
    pub essential_cookies: bool,
    pub analytics_cookies: bool,
    pub marketing_cookies: bool,
    pub functional_cookies: bool,
}

impl From<UpdatePreferencesRequest> for UserPreferences {
    fn from(request: UpdatePreferencesRequest) -> Self {
        Self {
            marketing_emails: request.marketing_emails,
            product_updates: request.product_updates,
            security_alerts: request.security_alerts,
            analytics_consent: request.analytics_consent,
            personalization: request.personalization,
            cookie_preference: request.cookie_preference,
            essential_cookies: request.essential_cookies,
            analytics_cookies: request.analytics_cookies,
            marketing_cookies: request.marketing_cookies,
            functional_cookies: request.functional_cookies,
        }
    }
}
