//! Problem handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::{ProblemService, SubmissionService},
    state::AppState,
};

use super::{
    request::{CreateProblemRequest, ListProblemsQuery, UpdateProblemRequest},
    response::{DeleteProblemResponse, ProblemResponse, ProblemSummary, ProblemsListResponse},
};
use crate::handlers::submissions::response::SubmissionView;

/// Create a new problem (admin only)
pub async fn create_problem(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateProblemRequest>,
) -> AppResult<(StatusCode, Json<ProblemResponse>)> {
    if !auth_user.is_admin() {
        return Err(AppError::Forbidden(
            "Only admins can create problems".to_string(),
        ));
    }

    payload.validate()?;

    let problem = ProblemService::create_problem(
        state.db(),
        state.judge().as_ref(),
        state.config(),
        &auth_user.id,
        payload,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ProblemResponse::from_parts(problem, None, true)),
    ))
}

/// Update a problem (admin only)
pub async fn update_problem(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProblemRequest>,
) -> AppResult<Json<ProblemResponse>> {
    if !auth_user.is_admin() {
        return Err(AppError::Forbidden(
            "Only admins can update problems".to_string(),
        ));
    }

    payload.validate()?;

    let problem = ProblemService::update_problem(state.db(), &id, payload).await?;

    Ok(Json(ProblemResponse::from_parts(problem, None, true)))
}

/// Delete a problem (admin only). Submissions, the solved-set entries and
/// the editorial video go with it.
pub async fn delete_problem(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DeleteProblemResponse>> {
    if !auth_user.is_admin() {
        return Err(AppError::Forbidden(
            "Only admins can delete problems".to_string(),
        ));
    }

    ProblemService::delete_problem(state.db(), state.media(), &id).await?;

    Ok(Json(DeleteProblemResponse {
        message: "Problem deleted".to_string(),
    }))
}

/// Get a specific problem, with its editorial video when one exists
pub async fn get_problem(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ProblemResponse>> {
    let (problem, video) = ProblemService::get_problem(state.db(), &id).await?;

    Ok(Json(ProblemResponse::from_parts(
        problem,
        video,
        auth_user.is_admin(),
    )))
}

/// List problems (paginated, optional difficulty/tag filters)
pub async fn list_problems(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Query(query): Query<ListProblemsQuery>,
) -> AppResult<Json<ProblemsListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let (problems, total) = ProblemService::list_problems(
        state.db(),
        page,
        per_page,
        query.difficulty.map(|d| d.as_str()),
        query.tag.map(|t| t.as_str()),
    )
    .await?;

    Ok(Json(ProblemsListResponse {
        problems: problems.into_iter().map(ProblemSummary::from).collect(),
        total,
        page,
        per_page,
    }))
}

/// The caller's solved problems
pub async fn solved_problems(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<ProblemSummary>>> {
    let problems = ProblemService::solved_problems(state.db(), &auth_user.id).await?;

    Ok(Json(problems.into_iter().map(ProblemSummary::from).collect()))
}

/// The caller's submissions for one problem
pub async fn submissions_for_problem(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<SubmissionView>>> {
    let submissions =
        SubmissionService::list_for_problem(state.db(), &auth_user.id, &id).await?;

    Ok(Json(submissions.into_iter().map(SubmissionView::from).collect()))
}
