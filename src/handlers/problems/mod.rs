//! Problem management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Problem routes; every endpoint requires a session, writes are admin-only
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/create", post(handler::create_problem))
        .route("/update/{id}", put(handler::update_problem))
        .route("/delete/{id}", delete(handler::delete_problem))
        .route("/problemById/{id}", get(handler::get_problem))
        .route("/getAllProblem", get(handler::list_problems))
        .route("/problemSolvedByUser", get(handler::solved_problems))
        .route("/submittedProblem/{id}", get(handler::submissions_for_problem))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
