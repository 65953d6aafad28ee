//! Token issuance
//!
//! Anyone who can reach this endpoint can mint a token for any identity.
//! The password field is not checked.

use crate::{ApiError, ApiResult, AppState, TokenRequest, TokenResponse, ValidatedForm};

use pc_core::Identity;

use axum::{Json, extract::State};

const PASSWORD_GRANT: &str = "password";

/// POST /token
pub async fn issue_token(
    State(state): State<AppState>,
    ValidatedForm(request): ValidatedForm<TokenRequest>,
) -> ApiResult<Json<TokenResponse>> {
    if let Some(ref grant_type) = request.grant_type
        && grant_type != PASSWORD_GRANT
    {
        return Err(ApiError::validation(
            Some("grant_type"),
            format!("unsupported grant_type '{grant_type}', expected '{PASSWORD_GRANT}'"),
        ));
    }

    let identity = Identity::parse(&request.username)
        .map_err(|e| ApiError::validation(Some("username"), e.message()))?;

    if request.password.is_some() {
        log::debug!("Ignoring password submitted for {}", identity);
    }
    if let Some(ref scope) = request.scope {
        log::debug!("Ignoring requested scope '{}' for {}", scope, identity);
    }

    let access_token = state.credentials.issue_token(&identity)?;
    log::info!("Issued access token for {}", identity);

    Ok(Json(TokenResponse::bearer(access_token)))
}
