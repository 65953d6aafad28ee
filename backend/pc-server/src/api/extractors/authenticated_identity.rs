//! Bearer-token authentication for REST handlers

use crate::{ApiError, AppState};

use pc_auth::bearer_token;
use pc_core::Identity;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// The identity named by a valid `Authorization: Bearer <token>` header.
///
/// Rejects with 401 when the header is missing, uses another scheme, or
/// carries a token that is forged, malformed or expired.
#[derive(Debug, Clone)]
pub struct AuthenticatedIdentity(pub Identity);

impl FromRequestParts<AppState> for AuthenticatedIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            // A non-UTF-8 header value is treated as an unknown scheme
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .map(|value| value.to_str().unwrap_or_default());

            let token = bearer_token(header)?;
            let identity = state.credentials.verify_token(token)?;

            log::debug!("Authenticated request for {}", identity);
            Ok(AuthenticatedIdentity(identity))
        }
    }
}
