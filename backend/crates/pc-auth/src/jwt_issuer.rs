use crate::{AuthError, Claims, Result as AuthErrorResult};

use pc_core::Identity;

use std::panic::Location;

use chrono::{DateTime, Duration, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Mints HS256 access tokens.
///
/// No credential is checked before issuance: whoever can reach the token
/// endpoint can obtain a token for any identity.
pub struct JwtIssuer {
    encoding_key: EncodingKey,
    header: Header,
    ttl: Duration,
}

impl JwtIssuer {
    pub fn with_hs256(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            header: Header::new(Algorithm::HS256),
            ttl,
        }
    }

    /// Issue a token valid from now for the configured TTL
    #[track_caller]
    pub fn issue(&self, identity: &Identity) -> AuthErrorResult<String> {
        self.issue_at(identity, Utc::now())
    }

    /// Issue a token as if it had been minted at `issued_at`
    #[track_caller]
    pub fn issue_at(
        &self,
        identity: &Identity,
        issued_at: DateTime<Utc>,
    ) -> AuthErrorResult<String> {
        let claims = Claims {
            sub: identity.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };

        encode(&self.header, &claims, &self.encoding_key).map_err(|e| AuthError::TokenEncode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
