//! Data-subject requests: export and erasure

use crate::{ApiResult, AppState, AuthenticatedIdentity, StatusResponse};

use pc_core::UserData;

use axum::{Json, extract::State};

/// POST /export-data
///
/// The full stored record; 404 when nothing has been stored.
pub async fn export_data(
    State(state): State<AppState>,
    AuthenticatedIdentity(identity): AuthenticatedIdentity,
) -> ApiResult<Json<UserData>> {
    let record = state.store.read(&identity).await?;
    log::info!("Exported data for {}", identity);

    Ok(Json(record))
}

/// DELETE /user-data
///
/// Succeeds whether or not a record existed.
pub async fn delete_user_data(
    State(state): State<AppState>,
    AuthenticatedIdentity(identity): AuthenticatedIdentity,
) -> ApiResult<Json<StatusResponse>> {
    if !state.store.delete(&identity).await? {
        log::debug!("No record to delete for {}", identity);
    }

    Ok(Json(StatusResponse::success()))
}
