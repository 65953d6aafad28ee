use crate::{ConfigErrorResult, DEFAULT_DATA_DIRECTORY, ensure_relative};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Root of the record store, relative to the config dir.
    /// Records live in `<data_dir>/users/`.
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: String::from(DEFAULT_DATA_DIRECTORY),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        ensure_relative("storage.data_dir", &self.data_dir)
    }
}
