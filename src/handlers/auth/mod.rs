//! User and session handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// User/session routes
pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/logout", post(handler::logout))
        .route("/check", get(handler::check_auth))
        .route("/admin/register", post(handler::admin_register))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/register", post(handler::register))
        .route("/login", post(handler::login))
        .merge(protected)
}
