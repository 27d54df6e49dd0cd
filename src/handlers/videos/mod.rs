//! Editorial video handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Editorial video routes (all admin-gated in the handlers)
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/create/{problem_id}", get(handler::create_upload_ticket))
        .route("/save", post(handler::save_video))
        .route("/delete/{problem_id}", delete(handler::delete_video))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
