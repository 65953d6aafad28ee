use crate::{
    ENCRYPTION_KEY_FILE, EncryptionKey, KeyFile, Result as AuthErrorResult, SIGNING_KEY_FILE,
    SigningSecret,
};

use std::fmt;
use std::path::Path;

use log::{info, warn};

/// Where a piece of key material came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// Configuration file or environment variable
    Config,
    /// Existing key file under the keys directory
    KeyFile,
    /// Freshly generated and written to the keys directory
    Generated,
}

impl fmt::Display for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Config => "config",
            Self::KeyFile => "key file",
            Self::Generated => "generated",
        };
        f.write_str(label)
    }
}

/// The signing secret and document encryption key, established once at startup
#[derive(Debug, Clone)]
pub struct KeyMaterial {
    pub signing_secret: SigningSecret,
    pub encryption_key: EncryptionKey,
    pub signing_source: KeySource,
    pub encryption_source: KeySource,
}

impl KeyMaterial {
    /// Resolve both keys.
    ///
    /// Each key is taken from `configured` if present, else read from its key
    /// file in `keys_dir`, else generated and persisted there so a restart
    /// keeps reading existing records.
    pub fn load_or_generate(
        configured_secret: Option<&str>,
        configured_key: Option<&str>,
        keys_dir: &Path,
    ) -> AuthErrorResult<Self> {
        let (signing_secret, signing_source) = match configured_secret {
            Some(secret) => (SigningSecret::new(secret)?, KeySource::Config),
            None => Self::signing_secret_from_file(keys_dir)?,
        };

        let (encryption_key, encryption_source) = match configured_key {
            Some(key) => (EncryptionKey::from_base64(key)?, KeySource::Config),
            None => Self::encryption_key_from_file(keys_dir)?,
        };

        info!(
            "Key material ready: signing secret from {}, encryption key from {}",
            signing_source, encryption_source
        );

        Ok(Self {
            signing_secret,
            encryption_key,
            signing_source,
            encryption_source,
        })
    }

    fn signing_secret_from_file(keys_dir: &Path) -> AuthErrorResult<(SigningSecret, KeySource)> {
        let file = KeyFile::new(keys_dir, SIGNING_KEY_FILE);

        if let Some(stored) = file.read()? {
            return Ok((SigningSecret::new(&stored)?, KeySource::KeyFile));
        }

        let secret = SigningSecret::generate();
        file.create(secret.as_str())?;
        warn!(
            "Generated new token signing secret at {}; tokens issued before this start are no longer valid",
            file.path().display()
        );

        Ok((secret, KeySource::Generated))
    }

    fn encryption_key_from_file(keys_dir: &Path) -> AuthErrorResult<(EncryptionKey, KeySource)> {
        let file = KeyFile::new(keys_dir, ENCRYPTION_KEY_FILE);

        if let Some(stored) = file.read()? {
            return Ok((EncryptionKey::from_base64(&stored)?, KeySource::KeyFile));
        }

        let key = EncryptionKey::generate();
        file.create(&key.to_base64())?;
        warn!(
            "Generated new document encryption key at {}; records written under any previous key cannot be decrypted. Back this file up.",
            file.path().display()
        );

        Ok((key, KeySource::Generated))
    }
}
