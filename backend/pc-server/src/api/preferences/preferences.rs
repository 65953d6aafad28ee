//! Preference REST API handlers

use crate::{
    ApiResult, AppState, AuthenticatedIdentity, StatusResponse, UpdatePreferencesRequest,
    ValidatedJson,
};

use pc_core::{UserData, UserPreferences};

use axum::{Json, extract::State};
use chrono::Utc;

/// GET /preferences
///
/// Stored preferences, or the defaults when nothing has been saved yet.
/// Never creates a record.
pub async fn get_preferences(
    State(state): State<AppState>,
    AuthenticatedIdentity(identity): AuthenticatedIdentity,
) -> ApiResult<Json<UserPreferences>> {
    let preferences = state
        .store
        .find(&identity)
        .await?
        .map(|record| record.preferences)
        .unwrap_or_default();

    Ok(Json(preferences))
}

/// PUT /preferences
///
/// Replaces the whole record and stamps both timestamps.
pub async fn set_preferences(
    State(state): State<AppState>,
    AuthenticatedIdentity(identity): AuthenticatedIdentity,
    ValidatedJson(request): ValidatedJson<UpdatePreferencesRequest>,
) -> ApiResult<Json<StatusResponse>> {
    let preferences = UserPreferences::from(request);
    preferences.validate()?;

    let record = UserData::new(identity.clone(), preferences, Utc::now());
    state.store.write(&identity, &record).await?;
    log::info!("Updated preferences for {}", identity);

    Ok(Json(StatusResponse::success()))
}
