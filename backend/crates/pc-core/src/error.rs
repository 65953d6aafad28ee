use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on '{field}': {message} {location}")]
    Validation {
        field: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid identity: {message} {location}")]
    InvalidIdentity {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Name of the offending field, if the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            Self::InvalidIdentity { .. } => None,
        }
    }

    /// Message without the location suffix, safe to hand back to a client
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. } | Self::InvalidIdentity { message, .. } => message,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
