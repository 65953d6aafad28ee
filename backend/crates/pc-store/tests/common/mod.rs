use pc_auth::{DocumentCipher, EncryptionKey};
use pc_core::{Identity, UserData, UserPreferences};
use pc_store::PreferenceStore;

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

pub fn cipher_with(key: [u8; 32]) -> Arc<DocumentCipher> {
    Arc::new(DocumentCipher::new(&EncryptionKey::from_bytes(key)).unwrap())
}

/// A store rooted in a fresh temp directory (kept alive by the returned guard)
pub fn create_test_store() -> (PreferenceStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = PreferenceStore::new(temp_dir.path(), cipher_with([7; 32]));
    (store, temp_dir)
}

pub fn identity(raw: &str) -> Identity {
    Identity::parse(raw).unwrap()
}

pub fn create_test_record(email: &str, marketing_emails: bool) -> UserData {
    let preferences = UserPreferences {
        marketing_emails,
        cookie_preference: "all".to_string(),
        ..UserPreferences::default()
    };
    let now = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
    UserData::new(identity(email), preferences, now)
}
