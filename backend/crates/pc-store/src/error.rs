use pc_auth::AuthError;
use pc_core::{CoreError, ErrorLocation};

use std::panic::Location;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("No preference record for {identity} {location}")]
    NotFound {
        identity: String,
        location: ErrorLocation,
    },

    #[error("I/O error on {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Record serialization failed: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Record encryption error: {source} {location}")]
    Crypto {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },

    #[error("Invalid identity: {source} {location}")]
    Identity {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl From<AuthError> for StoreError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::Crypto {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for StoreError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Identity {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
