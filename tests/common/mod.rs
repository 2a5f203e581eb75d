//! Shared helpers for integration tests.

#![allow(dead_code)]

use celcoin_client::{CelcoinClient, CelcoinConfig};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CLIENT_ID: &str = "test-client";
pub const CLIENT_SECRET: &str = "test-secret";

/// Configuration pointing both endpoints at `server`.
pub fn config(server: &MockServer) -> CelcoinConfig {
    CelcoinConfig::builder()
        .client_id(CLIENT_ID)
        .client_secret(CLIENT_SECRET)
        .base_url(server.uri())
        .timeout(Duration::from_secs(5))
        .build()
        .expect("valid test config")
}

/// Client against `server` with the default transport.
pub fn client(server: &MockServer) -> CelcoinClient {
    CelcoinClient::new(config(server)).expect("client builds")
}

/// Login response body.
pub fn login_body(access_token: &str, expires_in: u64) -> Value {
    json!({
        "access_token": access_token,
        "expires_in": expires_in,
        "token_type": "Bearer"
    })
}

/// Mounts a login endpoint that must be hit exactly `times` times.
pub async fn mount_login(server: &MockServer, access_token: &str, expires_in: u64, times: u64) {
    Mock::given(method("POST"))
        .and(path("/v5/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_body(access_token, expires_in)))
        .expect(times)
        .mount(server)
        .await;
}

/// Wraps `body` in a success envelope.
pub fn success(body: Value) -> Value {
    json!({"version": "1.0.0", "status": "SUCCESS", "body": body})
}

/// Envelope without body.
pub fn ack() -> Value {
    json!({"version": "1.0.0", "status": "SUCCESS"})
}
