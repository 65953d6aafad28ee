use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("JWT encode failed: {source} {location}")]
    TokenEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Encryption failed: {message} {location}")]
    Encryption {
        message: String,
        location: ErrorLocation,
    },

    #[error("Decryption failed: {message} {location}")]
    Decryption {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid key material: {message} {location}")]
    KeyMaterial {
        message: String,
        location: ErrorLocation,
    },

    #[error("Key file {path}: {source} {location}")]
    KeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// True for failures that mean "the caller is not authenticated"
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::InvalidToken { .. }
                | Self::TokenExpired { .. }
                | Self::MissingHeader { .. }
                | Self::InvalidScheme { .. }
        )
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::MissingHeader { .. } => "MISSING_AUTH_HEADER",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::TokenEncode { .. } => "TOKEN_ENCODE_FAILED",
            Self::Encryption { .. } => "ENCRYPTION_FAILED",
            Self::Decryption { .. } => "DECRYPTION_FAILED",
            Self::KeyMaterial { .. } => "INVALID_KEY_MATERIAL",
            Self::KeyFile { .. } => "KEY_FILE_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
