//! User/session handler implementations

use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use crate::{
    constants::{SESSION_COOKIE_NAME, roles},
    error::{AppError, AppResult},
    middleware::auth::{AuthenticatedUser, SessionToken},
    services::AuthService,
    state::AppState,
};

use super::{
    request::{LoginRequest, RegisterRequest},
    response::{CheckAuthResponse, LoginResponse, LogoutResponse, RegisterResponse, UserResponse},
};

/// Build the HttpOnly session cookie
fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Register a new user and start a session
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, CookieJar, Json<RegisterResponse>)> {
    payload.validate()?;

    let (user, token) = AuthService::register(
        state.db(),
        state.config(),
        &payload.first_name,
        &payload.email,
        &payload.password,
        roles::USER,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        jar.add(session_cookie(token)),
        Json(RegisterResponse {
            message: "Registered successfully".to_string(),
            user: UserResponse::from(user),
        }),
    ))
}

/// Register a new administrator. Caller must already be an admin; the
/// caller's own session is left untouched.
pub async fn admin_register(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    if !auth_user.is_admin() {
        return Err(AppError::Forbidden(
            "Only admins can register admins".to_string(),
        ));
    }

    payload.validate()?;

    let (user, _token) = AuthService::register(
        state.db(),
        state.config(),
        &payload.first_name,
        &payload.email,
        &payload.password,
        roles::ADMIN,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Admin registered successfully".to_string(),
            user: UserResponse::from(user),
        }),
    ))
}

/// Login with email and password
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<LoginResponse>)> {
    payload.validate()?;

    let (user, token) =
        AuthService::login(state.db(), state.config(), &payload.email, &payload.password).await?;

    Ok((
        jar.add(session_cookie(token)),
        Json(LoginResponse {
            message: "Logged in successfully".to_string(),
            user: UserResponse::from(user),
        }),
    ))
}

/// Logout: revoke the presented token and clear the cookie
pub async fn logout(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    SessionToken(token): SessionToken,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<LogoutResponse>)> {
    let claims = AuthService::verify_token(&token, &state.config().jwt.secret)?;
    AuthService::logout(state.redis(), &token, &claims).await?;

    let removal = Cookie::build((SESSION_COOKIE_NAME, "")).path("/").build();

    Ok((
        jar.remove(removal),
        Json(LogoutResponse {
            message: "Logged out successfully".to_string(),
        }),
    ))
}

/// Validate the current session and return the caller's identity
pub async fn check_auth(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<CheckAuthResponse>> {
    let user = AuthService::get_user_by_id(state.db(), &auth_user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(CheckAuthResponse {
        user: UserResponse::from(user),
    }))
}
