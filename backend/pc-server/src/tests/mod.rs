mod api;

use crate::AppState;

use pc_auth::{CredentialStore, EncryptionKey, KeyMaterial, TokenConfig};

use std::env;
use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

pub(crate) const TEST_SECRET: &str = "unit-test-signing-secret-0123456789";

pub(crate) fn create_test_state(data_dir: &Path) -> AppState {
    let key = EncryptionKey::from_bytes([5; 32]);
    let keys = KeyMaterial::load_or_generate(
        Some(TEST_SECRET),
        Some(&key.to_base64()),
        data_dir,
    )
    .unwrap();
    let credentials = Arc::new(CredentialStore::new(&keys, TokenConfig::default()).unwrap());
    AppState::new(credentials, data_dir)
}

/// Points PC_CONFIG_DIR at a temp directory, restoring the previous value on drop
pub(crate) struct ConfigDirGuard {
    pub(crate) dir: TempDir,
    original: Option<String>,
}

impl ConfigDirGuard {
    pub(crate) fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let original = env::var("PC_CONFIG_DIR").ok();
        unsafe {
            env::set_var("PC_CONFIG_DIR", dir.path());
        }
        Self { dir, original }
    }
}

impl Drop for ConfigDirGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var("PC_CONFIG_DIR", val),
                None => env::remove_var("PC_CONFIG_DIR"),
            }
        }
    }
}
