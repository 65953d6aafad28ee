use crate::{AuthError, Result as AuthErrorResult};

use std::io::Write;
use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use zeroize::Zeroizing;

pub const SIGNING_KEY_FILE: &str = "signing.key";
pub const ENCRYPTION_KEY_FILE: &str = "encryption.key";

/// Owner read/write only
#[cfg(unix)]
const KEY_FILE_MODE: u32 = 0o600;

/// A single secret persisted as text under the keys directory
pub struct KeyFile {
    path: PathBuf,
}

impl KeyFile {
    pub fn new(keys_dir: &Path, name: &str) -> Self {
        Self {
            path: keys_dir.join(name),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the stored secret, or `None` if the file does not exist
    #[track_caller]
    pub fn read(&self) -> AuthErrorResult<Option<Zeroizing<String>>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(Zeroizing::new(contents.trim().to_string()))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    /// Write a new key file. Refuses to overwrite an existing one.
    #[track_caller]
    pub fn create(&self, secret: &str) -> AuthErrorResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let mut options = std::fs::OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(KEY_FILE_MODE);
        }

        let mut file = options.open(&self.path).map_err(|e| self.io_error(e))?;
        file.write_all(secret.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|e| self.io_error(e))?;

        Ok(())
    }

    /// Unix permission bits of the key file
    #[cfg(unix)]
    #[track_caller]
    pub fn mode(&self) -> AuthErrorResult<u32> {
        use std::os::unix::fs::PermissionsExt;

        let metadata = std::fs::metadata(&self.path).map_err(|e| self.io_error(e))?;
        Ok(metadata.permissions().mode() & 0o777)
    }

    #[track_caller]
    fn io_error(&self, source: std::io::Error) -> AuthError {
        AuthError::KeyFile {
            path: self.path.clone(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
