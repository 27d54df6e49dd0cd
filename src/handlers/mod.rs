//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by resource.

pub mod ai;
pub mod auth;
pub mod health;
pub mod problems;
pub mod submissions;
pub mod videos;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/user", auth::routes(state.clone()))
        .nest("/problem", problems::routes(state.clone()))
        .nest("/submission", submissions::routes(state.clone()))
        .nest("/ai", ai::routes(state.clone()))
        .nest("/video", videos::routes(state))
}
