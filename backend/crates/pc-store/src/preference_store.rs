//! Flat-file persistence for preference documents.
//!
//! Each identity owns exactly one file, `<data_dir>/users/<identity>.json`,
//! holding the base64 ciphertext of its serialized [`UserData`]. Writes land
//! in a temporary sibling first and are renamed over the target, so readers
//! never observe a half-written record. Two writers racing on the same
//! identity both succeed; whichever rename happens last wins.

use crate::{Result as StoreErrorResult, StoreError};

use pc_auth::DocumentCipher;
use pc_core::{ErrorLocation, Identity, UserData};

use std::io::ErrorKind;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, info, warn};

/// Subdirectory of the data directory holding one file per identity
pub const USERS_DIR: &str = "users";

pub const RECORD_EXTENSION: &str = "json";

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

#[derive(Clone)]
pub struct PreferenceStore {
    users_dir: PathBuf,
    cipher: Arc<DocumentCipher>,
}

impl PreferenceStore {
    pub fn new(data_dir: impl Into<PathBuf>, cipher: Arc<DocumentCipher>) -> Self {
        Self {
            users_dir: data_dir.into().join(USERS_DIR),
            cipher,
        }
    }

    pub fn users_dir(&self) -> &Path {
        &self.users_dir
    }

    /// Location of the record for `identity`.
    ///
    /// `Identity` cannot hold separators or `..`, so the result always
    /// stays inside the users directory.
    pub fn path_for(&self, identity: &Identity) -> PathBuf {
        self.users_dir
            .join(format!("{}.{}", identity.as_str(), RECORD_EXTENSION))
    }

    pub async fn exists(&self, identity: &Identity) -> StoreErrorResult<bool> {
        let path = self.path_for(identity);
        tokio::fs::try_exists(&path)
            .await
            .map_err(|e| io_error(&path, e))
    }

    /// Load the record for `identity`, or `None` if nothing has been stored yet
    pub async fn find(&self, identity: &Identity) -> StoreErrorResult<Option<UserData>> {
        let path = self.path_for(identity);

        let sealed = match tokio::fs::read_to_string(&path).await {
            Ok(sealed) => sealed,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(&path, e)),
        };

        let plaintext = self.cipher.decrypt(sealed.trim())?;
        let record: UserData = serde_json::from_slice(&plaintext)?;

        if record.email != *identity {
            warn!(
                "Record at {} names {} but was read for {}",
                path.display(),
                record.email,
                identity
            );
        }

        Ok(Some(record))
    }

    /// Like [`find`](Self::find) but a missing record is an error
    pub async fn read(&self, identity: &Identity) -> StoreErrorResult<UserData> {
        self.find(identity)
            .await?
            .ok_or_else(|| StoreError::NotFound {
                identity: identity.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Replace the record for `identity` with `record`
    pub async fn write(&self, identity: &Identity, record: &UserData) -> StoreErrorResult<()> {
        let plaintext = serde_json::to_vec(record)?;
        let sealed = self.cipher.encrypt(&plaintext)?;

        tokio::fs::create_dir_all(&self.users_dir)
            .await
            .map_err(|e| io_error(&self.users_dir, e))?;

        let path = self.path_for(identity);
        let temp_path = self.temp_path_for();

        if let Err(e) = tokio::fs::write(&temp_path, sealed.as_bytes()).await {
            return Err(io_error(&temp_path, e));
        }

        if let Err(e) = tokio::fs::rename(&temp_path, &path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&temp_path).await {
                warn!(
                    "Failed to remove temporary record {}: {}",
                    temp_path.display(),
                    cleanup
                );
            }
            return Err(io_error(&path, e));
        }

        debug!("Stored preference record for {}", identity);
        Ok(())
    }

    /// Remove the record for `identity`.
    ///
    /// Returns whether a record existed. Deleting an absent record succeeds.
    pub async fn delete(&self, identity: &Identity) -> StoreErrorResult<bool> {
        let path = self.path_for(identity);

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                info!("Deleted preference record for {}", identity);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error(&path, e)),
        }
    }

    // Leading dot: identities cannot start with one, so temp files never
    // shadow a real record. Identities may use nearly the whole file name
    // length, so the temp name does not include one.
    fn temp_path_for(&self) -> PathBuf {
        let n = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        self.users_dir.join(format!(".tmp.{}.{}", std::process::id(), n))
    }
}

#[track_caller]
fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.to_path_buf(),
        source,
        location: ErrorLocation::from(Location::caller()),
    }
}
