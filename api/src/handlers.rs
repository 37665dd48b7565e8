//! HTTP request handlers for the SimpleCICD demo API

use crate::AppState;
use axum::{extract::State, response::Json};
use serde::Serialize;

/// Greeting returned by `GET /`
pub const GREETING: &str = "Hello from SimpleCICD!";

/// Fixed message accompanying the echoed key on `GET /secret`
pub const SECRET_MESSAGE: &str = "This endpoint returns the injected ApiKey (for demo only).";

/// Response payload for the `/secret` endpoint.
///
/// Serialized with PascalCase member names (`Message`, `ApiKey`) to keep
/// the wire format stable for pipeline checks that parse it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SecretResponse {
    pub message: String,
    pub api_key: String,
}

/// Greeting endpoint
pub async fn greeting() -> &'static str {
    GREETING
}

/// Echo the API key captured from configuration at startup
pub async fn secret(State(state): State<AppState>) -> Json<SecretResponse> {
    Json(SecretResponse {
        message: SECRET_MESSAGE.to_string(),
        api_key: state.config.api_key.clone(),
    })
}
