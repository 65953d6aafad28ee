pub mod bearer;
pub mod claims;
pub mod credential_store;
pub mod document_cipher;
pub mod encryption_key;
pub mod error;
pub mod jwt_issuer;
pub mod jwt_validator;
pub mod key_audit;
pub mod key_file;
pub mod key_material;
pub mod signing_secret;
pub mod token_config;

pub use bearer::bearer_token;
pub use claims::Claims;
pub use credential_store::CredentialStore;
pub use document_cipher::{DocumentCipher, NONCE_SIZE};
pub use encryption_key::{ENCRYPTION_KEY_SIZE, EncryptionKey};
pub use error::{AuthError, Result};
pub use jwt_issuer::JwtIssuer;
pub use jwt_validator::JwtValidator;
pub use key_audit::{AuditCheck, AuditReport, CheckStatus, KeyAudit};
pub use key_file::{ENCRYPTION_KEY_FILE, KeyFile, SIGNING_KEY_FILE};
pub use key_material::{KeyMaterial, KeySource};
pub use signing_secret::SigningSecret;
pub use token_config::TokenConfig;

#[cfg(test)]
mod tests;
