//! HTTP server for the SimpleCICD demo API
//!
//! Two routes, no state beyond the configuration captured at startup:
//! `GET /` returns a fixed greeting and `GET /secret` echoes the
//! configured API key so a deployment pipeline can verify the value it
//! injected. Every other path falls through to axum's default 404.

use axum::{routing::get, Router};
use simplecicd_core::prelude::*;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod handlers;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
}

/// Build the Axum router with all routes
pub fn build_router(config: ServerConfig) -> Router {
    let app_state = AppState { config };

    Router::new()
        .route("/", get(handlers::greeting))
        .route("/secret", get(handlers::secret))
        .with_state(app_state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

/// Bind the configured address and serve until the process is stopped
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let listen = config.listen;
    let router = build_router(config);

    let listener = tokio::net::TcpListener::bind(&listen)
        .await
        .map_err(|e| ServerError::StartupFailed(format!("Failed to bind to {}: {}", listen, e)))?;

    info!("SimpleCICD listening on {}", listen);

    axum::serve(listener, router)
        .await
        .map_err(|e| ServerError::StartupFailed(format!("Server error: {}", e)))?;

    Ok(())
}
