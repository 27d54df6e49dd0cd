//! Authentication middleware
//!
//! The session credential is a JWT carried in an HTTP cookie. Every
//! authenticated request verifies the token and checks the server-side
//! revocation list before the handler runs.

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{
    constants::{SESSION_COOKIE_NAME, roles},
    error::AppError,
    services::AuthService,
    state::AppState,
};

/// Authenticated user extracted from the session cookie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub role: String,
}

impl AuthenticatedUser {
    /// Check if this identity has admin privileges
    pub fn is_admin(&self) -> bool {
        self.role == roles::ADMIN
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthenticated)
    }
}

/// The raw session token as presented, kept around so logout can revoke it
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionToken>()
            .cloned()
            .ok_or(AppError::Unauthenticated)
    }
}

/// Authentication middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let token = jar
        .get(SESSION_COOKIE_NAME)
        .map(|c| c.value().to_string())
        .ok_or_else(|| {
            debug!(path = %path, "Auth failed: no session cookie");
            AppError::Unauthenticated
        })?;

    let claims = AuthService::verify_token(&token, &state.config().jwt.secret).map_err(|e| {
        debug!(path = %path, "Auth failed: token verification failed");
        e
    })?;

    // A structurally valid token may still have been revoked by logout
    if AuthService::is_revoked(state.redis(), &token).await? {
        debug!(path = %path, sub = %claims.sub, "Auth failed: token revoked");
        return Err(AppError::Unauthenticated);
    }

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
        debug!(path = %path, sub = %claims.sub, "Auth failed: invalid user id in token");
        AppError::Unauthenticated
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        id: user_id,
        role: claims.role,
    });
    request.extensions_mut().insert(SessionToken(token));

    Ok(next.run(request).await)
}
