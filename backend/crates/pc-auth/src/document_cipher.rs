//! AES-256-GCM encryption for preference documents at rest.
//!
//! Stored form is URL-safe base64 of `nonce || ciphertext || tag`, with a
//! fresh random 96-bit nonce per message.

use crate::{AuthError, EncryptionKey, Result as AuthErrorResult};

use std::panic::Location;

use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, KeyInit},
};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use error_location::ErrorLocation;
use rand::RngCore;

/// 12-byte nonce for AES-GCM (96 bits is the standard)
pub const NONCE_SIZE: usize = 12;

pub struct DocumentCipher {
    cipher: Aes256Gcm,
}

impl DocumentCipher {
    #[track_caller]
    pub fn new(key: &EncryptionKey) -> AuthErrorResult<Self> {
        let cipher =
            Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|e| AuthError::KeyMaterial {
                message: format!("invalid AES-256 key: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self { cipher })
    }

    /// Encrypt plaintext into its stored text form
    #[track_caller]
    pub fn encrypt(&self, plaintext: &[u8]) -> AuthErrorResult<String> {
        let mut nonce_bytes = [0u8; NONCE_SIZE];
        rand::rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext =
            self.cipher
                .encrypt(nonce, plaintext)
                .map_err(|e| AuthError::Encryption {
                    message: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

        let mut sealed = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        sealed.extend_from_slice(&nonce_bytes);
        sealed.extend_from_slice(&ciphertext);

        Ok(URL_SAFE.encode(sealed))
    }

    /// Decrypt a value produced by [`DocumentCipher::encrypt`].
    ///
    /// Fails on tampering, truncation, or a value sealed under another key.
    #[track_caller]
    pub fn decrypt(&self, sealed: &str) -> AuthErrorResult<Vec<u8>> {
        let sealed = URL_SAFE
            .decode(sealed.trim())
            .map_err(|e| AuthError::Decryption {
                message: format!("ciphertext is not valid base64: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if sealed.len() < NONCE_SIZE {
            return Err(AuthError::Decryption {
                message: format!(
                    "ciphertext too short: expected at least {NONCE_SIZE} bytes, got {}",
                    sealed.len()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_SIZE);
        let nonce = Nonce::from_slice(nonce_bytes);

        self.cipher
            .decrypt(nonce, ciphertext)
            .map_err(|_| AuthError::Decryption {
                message: "authentication tag mismatch (tampered data or wrong key)".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
