#![allow(dead_code)]

//! Test infrastructure for pc-server API tests

use pc_auth::{CredentialStore, EncryptionKey, KeyMaterial, TokenConfig};
use pc_core::Identity;
use pc_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-signing-secret-0123";
pub const JANE: &str = "jane@example.com";

/// A router over a fresh temp data directory; keep the `TempDir` alive
pub struct TestApp {
    pub state: AppState,
    pub temp_dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_key([11; 32])
    }

    pub fn with_key(key: [u8; 32]) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let state = create_test_app_state(&temp_dir, key);
        Self { state, temp_dir }
    }

    pub fn router(&self) -> Router {
        build_router(self.state.clone(), &["*".to_string()])
    }

    pub fn token_for(&self, raw_identity: &str) -> String {
        let identity = Identity::parse(raw_identity).unwrap();
        self.state.credentials.issue_token(&identity).unwrap()
    }

    pub fn expired_token_for(&self, raw_identity: &str) -> String {
        let identity = Identity::parse(raw_identity).unwrap();
        self.state
            .credentials
            .issuer()
            .issue_at(&identity, Utc::now() - Duration::minutes(31))
            .unwrap()
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router().oneshot(request).await.unwrap()
    }
}

pub fn create_test_app_state(temp_dir: &TempDir, key: [u8; 32]) -> AppState {
    let key = EncryptionKey::from_bytes(key);
    let keys = KeyMaterial::load_or_generate(
        Some(TEST_SECRET),
        Some(&key.to_base64()),
        temp_dir.path(),
    )
    .unwrap();
    let credentials = Arc::new(CredentialStore::new(&keys, TokenConfig::default()).unwrap());
    AppState::new(credentials, &temp_dir.path().join("data"))
}

pub fn authorized(method: &str, uri: &str, token: &str, body: Body) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap()
}

pub fn preferences_json(marketing_emails: bool, cookie_preference: &str) -> serde_json::Value {
    serde_json::json!({
        "marketing_emails": marketing_emails,
        "product_updates": false,
        "security_alerts": true,
        "analytics_consent": true,
        "personalization": false,
        "cookie_preference": cookie_preference,
        "essential_cookies": true,
        "analytics_cookies": true,
        "marketing_cookies": marketing_emails,
        "functional_cookies": false,
    })
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
