//! Rate limiting middleware

use axum::{
    body::Body,
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use redis::AsyncCommands;
use std::net::SocketAddr;

use crate::{constants, error::AppError, state::AppState};

/// Rate limit middleware: per-IP counters in Redis, keyed by path bucket
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let ip = addr.ip().to_string();
    let path = request.uri().path().to_string();

    let (limit, window) = get_rate_limit(&path);

    let key = format!("rate_limit:{}:{}", ip, path_bucket(&path));
    let mut redis = state.redis();

    let count: i64 = redis.incr(&key, 1).await.unwrap_or(0);

    if count == 1 {
        // Set expiry on first request
        let _: () = redis.expire(&key, window).await.unwrap_or(());
    }

    if count > limit {
        return Err(AppError::TooManyRequests);
    }

    Ok(next.run(request).await)
}

/// Get rate limit for a path
fn get_rate_limit(path: &str) -> (i64, i64) {
    if path.starts_with("/user") {
        (
            constants::rate_limits::USER_MAX_REQUESTS,
            constants::rate_limits::USER_WINDOW_SECS,
        )
    } else if path.starts_with("/submission") {
        (
            constants::rate_limits::SUBMISSION_MAX_REQUESTS,
            constants::rate_limits::SUBMISSION_WINDOW_SECS,
        )
    } else {
        (
            constants::rate_limits::GENERAL_MAX_REQUESTS,
            constants::rate_limits::GENERAL_WINDOW_SECS,
        )
    }
}

/// Get bucket for path (for grouping similar endpoints)
fn path_bucket(path: &str) -> &str {
    if path.starts_with("/user") {
        "user"
    } else if path.starts_with("/submission") {
        "submission"
    } else if path.starts_with("/problem") {
        "problem"
    } else if path.starts_with("/video") {
        "video"
    } else if path.starts_with("/ai") {
        "ai"
    } else {
        "general"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_selection() {
        assert_eq!(path_bucket("/user/login"), "user");
        assert_eq!(path_bucket("/submission/run/abc"), "submission");
        assert_eq!(path_bucket("/problem/getAllProblem"), "problem");
        assert_eq!(path_bucket("/health"), "general");
    }

    #[test]
    fn test_tighter_limits_for_sensitive_buckets() {
        let (user_limit, _) = get_rate_limit("/user/login");
        let (general_limit, _) = get_rate_limit("/health");
        assert!(user_limit < general_limit);
    }
}
