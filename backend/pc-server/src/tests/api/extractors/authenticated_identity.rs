use crate::tests::create_test_state;
use crate::{ApiError, AuthenticatedIdentity};

use pc_core::Identity;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use googletest::prelude::*;
use tempfile::TempDir;

async fn extract(
    state: &crate::AppState,
    authorization: Option<&str>,
) -> std::result::Result<AuthenticatedIdentity, ApiError> {
    let mut builder = Request::builder();
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    let (mut parts, _body) = builder.body(Body::empty()).unwrap().into_parts();
    AuthenticatedIdentity::from_request_parts(&mut parts, state).await
}

fn unauthorized_code(result: std::result::Result<AuthenticatedIdentity, ApiError>) -> &'static str {
    match result {
        Err(ApiError::Unauthorized { code, .. }) => code,
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}

#[tokio::test]
async fn given_valid_bearer_token_when_extracting_then_returns_identity() {
    // Given
    let temp = TempDir::new().unwrap();
    let state = create_test_state(temp.path());
    let jane = Identity::parse("jane@example.com").unwrap();
    let token = state.credentials.issue_token(&jane).unwrap();

    // When
    let result = extract(&state, Some(&format!("Bearer {token}"))).await;

    // Then
    assert_that!(result, ok(anything()));
    assert_eq!(result.unwrap().0, jane);
}

#[tokio::test]
async fn given_lowercase_scheme_when_extracting_then_accepted() {
    let temp = TempDir::new().unwrap();
    let state = create_test_state(temp.path());
    let token = state
        .credentials
        .issue_token(&Identity::parse("jane@example.com").unwrap())
        .unwrap();

    let result = extract(&state, Some(&format!("bearer {token}"))).await;

    assert_that!(result, ok(anything()));
}

#[tokio::test]
async fn given_no_header_when_extracting_then_missing_header() {
    let temp = TempDir::new().unwrap();
    let state = create_test_state(temp.path());

    let result = extract(&state, None).await;

    assert_that!(unauthorized_code(result), eq("MISSING_AUTH_HEADER"));
}

#[tokio::test]
async fn given_basic_scheme_when_extracting_then_invalid_scheme() {
    let temp = TempDir::new().unwrap();
    let state = create_test_state(temp.path());

    let result = extract(&state, Some("Basic amFuZTpzZWNyZXQ=")).await;

    assert_that!(unauthorized_code(result), eq("INVALID_AUTH_SCHEME"));
}

#[tokio::test]
async fn given_garbage_token_when_extracting_then_invalid_token() {
    let temp = TempDir::new().unwrap();
    let state = create_test_state(temp.path());

    let result = extract(&state, Some("Bearer not.a.jwt")).await;

    assert_that!(unauthorized_code(result), eq("INVALID_TOKEN"));
}
