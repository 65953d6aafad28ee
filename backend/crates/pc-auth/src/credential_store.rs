use crate::{
    DocumentCipher, JwtIssuer, JwtValidator, KeyMaterial, Result as AuthErrorResult, TokenConfig,
};

use pc_core::Identity;

use std::sync::Arc;

use chrono::Duration;

/// Token issuance/verification plus the document cipher, built once at
/// startup from [`KeyMaterial`] and shared read-only between requests.
pub struct CredentialStore {
    issuer: JwtIssuer,
    validator: JwtValidator,
    cipher: Arc<DocumentCipher>,
}

impl CredentialStore {
    pub fn new(keys: &KeyMaterial, config: TokenConfig) -> AuthErrorResult<Self> {
        let secret = keys.signing_secret.as_bytes();

        Ok(Self {
            issuer: JwtIssuer::with_hs256(secret, config.ttl),
            validator: JwtValidator::with_hs256(secret, config.leeway_secs),
            cipher: Arc::new(DocumentCipher::new(&keys.encryption_key)?),
        })
    }

    /// Mint a token for `identity`. No credential is verified.
    #[track_caller]
    pub fn issue_token(&self, identity: &Identity) -> AuthErrorResult<String> {
        self.issuer.issue(identity)
    }

    /// Check signature and expiry, returning the identity the token was issued for
    #[track_caller]
    pub fn verify_token(&self, token: &str) -> AuthErrorResult<Identity> {
        self.validator.verify(token)
    }

    #[track_caller]
    pub fn encrypt(&self, plaintext: &[u8]) -> AuthErrorResult<String> {
        self.cipher.encrypt(plaintext)
    }

    #[track_caller]
    pub fn decrypt(&self, sealed: &str) -> AuthErrorResult<Vec<u8>> {
        self.cipher.decrypt(sealed)
    }

    /// Shared handle to the cipher, for the record store
    pub fn cipher(&self) -> Arc<DocumentCipher> {
        Arc::clone(&self.cipher)
    }

    pub fn issuer(&self) -> &JwtIssuer {
        &self.issuer
    }

    pub fn token_ttl(&self) -> Duration {
        self.issuer.ttl()
    }
}
