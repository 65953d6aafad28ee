use crate::ApiError;

use pc_auth::AuthError;
use pc_core::{CoreError, Identity};
use pc_store::StoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "No data found".into(),
        location: here(),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "No data found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation(Some("cookie_preference"), "cannot be empty");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "cookie_preference");
}

#[tokio::test]
async fn test_unauthorized_returns_401_with_bearer_challenge() {
    let error = ApiError::from(AuthError::TokenExpired { location: here() });
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(http::header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "TOKEN_EXPIRED");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Storage operation failed".into(),
        location: here(),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_invalid_token_converts_to_unauthorized() {
    let error = ApiError::from(AuthError::InvalidToken {
        message: "InvalidSignature".into(),
        location: here(),
    });

    match error {
        ApiError::Unauthorized { code, message, .. } => {
            assert_eq!(code, "INVALID_TOKEN");
            assert!(!message.contains("InvalidSignature"));
        }
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}

#[test]
fn test_missing_header_and_wrong_scheme_convert_to_unauthorized() {
    let missing = ApiError::from(AuthError::MissingHeader { location: here() });
    let scheme = ApiError::from(AuthError::InvalidScheme { location: here() });

    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(scheme.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_decryption_failure_converts_to_internal_without_details() {
    let error = ApiError::from(AuthError::Decryption {
        message: "aead::Error".into(),
        location: here(),
    });

    match error {
        ApiError::Internal { message, .. } => assert!(!message.contains("aead")),
        other => panic!("expected Internal, got {other:?}"),
    }
}

#[test]
fn test_store_not_found_converts_to_not_found() {
    let error = ApiError::from(StoreError::NotFound {
        identity: "jane@example.com".into(),
        location: here(),
    });

    assert_eq!(error.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_store_io_error_converts_to_internal() {
    let error = ApiError::from(StoreError::Io {
        path: "/data/users/jane@example.com.json".into(),
        source: std::io::Error::other("disk full"),
        location: here(),
    });

    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_core_validation_error_keeps_field() {
    let error = ApiError::from(CoreError::Validation {
        field: "cookie_preference".into(),
        message: "cookie_preference cannot be empty".into(),
        location: here(),
    });

    match error {
        ApiError::Validation { field, .. } => {
            assert_eq!(field.as_deref(), Some("cookie_preference"))
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn test_invalid_identity_converts_to_validation() {
    let core_error = Identity::parse("../etc/passwd").unwrap_err();

    let error = ApiError::from(core_error);

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
}
