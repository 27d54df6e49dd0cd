//! Editorial video handler implementations

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    providers::UploadTicket,
    services::VideoService,
    state::AppState,
};

use super::{
    request::SaveVideoRequest,
    response::{DeleteVideoResponse, SaveVideoResponse},
};

/// Issue a signed upload ticket for a problem's editorial video (admin only)
pub async fn create_upload_ticket(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(problem_id): Path<Uuid>,
) -> AppResult<Json<UploadTicket>> {
    if !auth_user.is_admin() {
        return Err(AppError::Forbidden(
            "Only admins can upload editorial videos".to_string(),
        ));
    }

    let ticket = VideoService::create_upload_ticket(state.db(), state.media(), &problem_id).await?;

    Ok(Json(ticket))
}

/// Record the metadata of a completed upload (admin only)
pub async fn save_video(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<SaveVideoRequest>,
) -> AppResult<Json<SaveVideoResponse>> {
    if !auth_user.is_admin() {
        return Err(AppError::Forbidden(
            "Only admins can save editorial videos".to_string(),
        ));
    }

    payload.validate()?;

    let video = VideoService::save_metadata(
        state.db(),
        state.media(),
        &auth_user.id,
        &payload.problem_id,
        &payload.public_id,
        &payload.secure_url,
        payload.duration,
    )
    .await?;

    Ok(Json(SaveVideoResponse {
        message: "Editorial video saved".to_string(),
        video_solution: video,
    }))
}

/// Delete a problem's editorial video (admin only)
pub async fn delete_video(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(problem_id): Path<Uuid>,
) -> AppResult<Json<DeleteVideoResponse>> {
    if !auth_user.is_admin() {
        return Err(AppError::Forbidden(
            "Only admins can delete editorial videos".to_string(),
        ));
    }

    VideoService::delete_video(state.db(), state.media(), &problem_id).await?;

    Ok(Json(DeleteVideoResponse {
        message: "Editorial video deleted".to_string(),
    }))
}
