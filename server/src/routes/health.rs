//! Health check endpoint.

use axum::{extract::State, routing::get, Json, Router};
use roster_engine::LoadState;
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Where remote users are fetched from
    pub users_api_url: String,
    /// Progress of the startup fetch
    pub load: LoadState,
}

/// Create health routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(root))
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let load = state.dashboard.read().await.load_state().clone();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        users_api_url: state.config.users_api_url.clone(),
        load,
    })
}

/// Root handler.
async fn root() -> &'static str {
    "Roster Dashboard Server"
}
