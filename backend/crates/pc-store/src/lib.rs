pub mod error;
pub mod preference_store;

pub use error::{Result, StoreError};
pub use preference_store::{PreferenceStore, RECORD_EXTENSION, USERS_DIR};
