use crate::{AuthError, Result as AuthErrorResult};

use std::fmt;
use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use error_location::ErrorLocation;
use rand::RngCore;
use zeroize::Zeroizing;

/// AES-256 key size in bytes
pub const ENCRYPTION_KEY_SIZE: usize = 32;

/// Symmetric key protecting preference documents at rest.
///
/// Replacing it makes every record written under the previous key
/// unreadable; there is no re-encryption path.
#[derive(Clone)]
pub struct EncryptionKey(Zeroizing<[u8; ENCRYPTION_KEY_SIZE]>);

impl EncryptionKey {
    pub fn generate() -> Self {
        let mut bytes = [0u8; ENCRYPTION_KEY_SIZE];
        rand::rng().fill_bytes(&mut bytes);
        Self(Zeroizing::new(bytes))
    }

    pub fn from_bytes(bytes: [u8; ENCRYPTION_KEY_SIZE]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    /// Decode from URL-safe base64 (the key file and env var format)
    #[track_caller]
    pub fn from_base64(encoded: &str) -> AuthErrorResult<Self> {
        let decoded = Zeroizing::new(URL_SAFE.decode(encoded.trim()).map_err(|e| {
            AuthError::KeyMaterial {
                message: format!("encryption key is not URL-safe base64: {e}"),
                location: ErrorLocation::from(Location::caller()),
            }
        })?);

        let bytes: [u8; ENCRYPTION_KEY_SIZE] =
            decoded
                .as_slice()
                .try_into()
                .map_err(|_| AuthError::KeyMaterial {
                    message: format!(
                        "encryption key must be {} bytes, got {}",
                        ENCRYPTION_KEY_SIZE,
                        decoded.len()
                    ),
                    location: ErrorLocation::from(Location::caller()),
                })?;

        Ok(Self::from_bytes(bytes))
    }

    pub fn to_base64(&self) -> Zeroizing<String> {
        Zeroizing::new(URL_SAFE.encode(self.0.as_slice()))
    }

    pub fn as_bytes(&self) -> &[u8; ENCRYPTION_KEY_SIZE] {
        &self.0
    }
}

impl fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EncryptionKey(<redacted>)")
    }
}
