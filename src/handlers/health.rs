//! Health check handlers

use axum::{Json, Router, extract::State, routing::get};
use redis::AsyncCommands;
use serde::Serialize;

use crate::{db, state::AppState};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: bool,
    pub cache: bool,
}

/// Health check endpoint: liveness plus database and cache reachability
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = db::ping(state.db()).await.is_ok();

    let mut redis = state.redis();
    let cache = redis.set::<_, _, ()>("health_check", "1").await.is_ok();

    let status = if database && cache { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
        cache,
    })
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
