use crate::{AuthError, Result as AuthErrorResult};

use pc_core::Identity;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the identity that owns the preference document)
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification and recover the identity
    #[track_caller]
    pub fn identity(&self) -> AuthErrorResult<Identity> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidToken {
                message: "sub cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Identity::parse(&self.sub).map_err(|e| AuthError::InvalidToken {
            message: format!("sub is not a valid identity: {}", e.message()),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
