pub mod identity;
pub mod session_descriptor;
pub mod user_data;
pub mod user_preferences;
