use crate::{AuthError, Result as AuthErrorResult};

use std::fmt;
use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use error_location::ErrorLocation;
use rand::RngCore;
use zeroize::Zeroizing;

/// Shortest secret accepted for HS256 signing
pub const MIN_SIGNING_SECRET_LENGTH: usize = 32;

const GENERATED_SECRET_BYTES: usize = 48;

/// HMAC secret used to sign and verify access tokens.
///
/// The secret is used as the raw bytes of its text form, so a value from
/// the environment and one read from a key file behave the same.
#[derive(Clone)]
pub struct SigningSecret(Zeroizing<String>);

impl SigningSecret {
    pub fn generate() -> Self {
        let mut bytes = Zeroizing::new([0u8; GENERATED_SECRET_BYTES]);
        rand::rng().fill_bytes(bytes.as_mut_slice());
        Self(Zeroizing::new(URL_SAFE_NO_PAD.encode(bytes.as_slice())))
    }

    #[track_caller]
    pub fn new(secret: &str) -> AuthErrorResult<Self> {
        let secret = secret.trim();
        if secret.len() < MIN_SIGNING_SECRET_LENGTH {
            return Err(AuthError::KeyMaterial {
                message: format!(
                    "signing secret must be at least {MIN_SIGNING_SECRET_LENGTH} characters"
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(Self(Zeroizing::new(secret.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}
