#[allow(clippy::module_inception)]
pub mod preferences;
pub mod update_preferences_request;
