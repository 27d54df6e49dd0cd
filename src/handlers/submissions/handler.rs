//! Submission handler implementations

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::SubmissionService,
    state::AppState,
};

use super::{
    request::SubmissionBody,
    response::{RunResponse, SubmitResponse},
};

/// Evaluate code against the visible test cases without recording anything
pub async fn run_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(problem_id): Path<Uuid>,
    Json(payload): Json<SubmissionBody>,
) -> AppResult<Json<RunResponse>> {
    payload.validate()?;

    tracing::info!(
        user_id = %auth_user.id,
        problem_id = %problem_id,
        language = %payload.language,
        "Run evaluation requested"
    );

    let evaluation = SubmissionService::run(
        state.db(),
        state.judge().as_ref(),
        state.config(),
        &problem_id,
        &payload.code,
        payload.language,
    )
    .await?;

    Ok(Json(RunResponse::from(evaluation)))
}

/// Evaluate code against all test cases and record the verdict
pub async fn submit_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(problem_id): Path<Uuid>,
    Json(payload): Json<SubmissionBody>,
) -> AppResult<Json<SubmitResponse>> {
    payload.validate()?;

    tracing::info!(
        user_id = %auth_user.id,
        problem_id = %problem_id,
        language = %payload.language,
        "Submission received"
    );

    let (_submission, outcome) = SubmissionService::submit(
        state.db(),
        state.judge().as_ref(),
        state.config(),
        &auth_user.id,
        &problem_id,
        &payload.code,
        payload.language,
    )
    .await?;

    Ok(Json(SubmitResponse {
        accepted: outcome.status.is_accepted(),
        status: outcome.status.to_string(),
        passed_test_cases: outcome.passed,
        total_test_cases: outcome.total,
        runtime: outcome.runtime_seconds,
        memory: outcome.memory_kb,
        error: outcome.error_message,
    }))
}
