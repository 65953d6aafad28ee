pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::identity::{Identity, MAX_IDENTITY_LENGTH};
pub use models::session_descriptor::SessionDescriptor;
pub use models::user_data::UserData;
pub use models::user_preferences::{MAX_COOKIE_PREFERENCE_LENGTH, UserPreferences};

pub use error_location::ErrorLocation;
