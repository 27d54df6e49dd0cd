//! Submission handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{Router, middleware, routing::post};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Submission routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/run/{problem_id}", post(handler::run_submission))
        .route("/submit/{problem_id}", post(handler::submit_submission))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
