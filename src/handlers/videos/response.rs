//! Editorial video response DTOs

use serde::Serialize;

use crate::models::Video;

/// Metadata save confirmation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveVideoResponse {
    pub message: String,
    pub video_solution: Video,
}

/// Deletion confirmation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteVideoResponse {
    pub message: String,
}
