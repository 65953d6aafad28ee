use serde::Deserialize;

/// OAuth2 password-grant form. Only `username` is used.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,

    /// Accepted and ignored
    #[serde(default)]
    pub password: Option<String>,

    /// Must be "password" when present
    #[serde(default)]
    pub grant_type: Option<String>,

    #[serde(default)]
    pub scope: Option<String>,
}
