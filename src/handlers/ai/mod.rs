//! AI assistant handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{Router, middleware, routing::post};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// AI chat routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/chat", post(handler::chat))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
