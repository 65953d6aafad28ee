pub mod error;
pub mod extractors;
pub mod preferences;
pub mod status_response;
pub mod token;
pub mod user_data;
