use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health
pub async fn health_check() -> Response {
    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready
///
/// Ready once the users directory exists or can be created.
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    match tokio::fs::create_dir_all(state.store.users_dir()).await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            log::warn!(
                "Readiness check failed for {}: {}",
                state.store.users_dir().display(),
                e
            );
            (StatusCode::SERVICE_UNAVAILABLE, "Storage unavailable").into_response()
        }
    }
}
