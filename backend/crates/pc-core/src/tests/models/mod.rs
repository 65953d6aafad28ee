mod identity;
mod user_data;
mod user_preferences;
