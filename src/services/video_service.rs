//! Editorial video service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{ProblemRepository, VideoRepository},
    error::{AppError, AppResult},
    models::Video,
    providers::{MediaClient, UploadTicket},
};

/// Editorial video service for business logic
pub struct VideoService;

impl VideoService {
    /// Issue a signed upload ticket for a problem's editorial video
    pub async fn create_upload_ticket(
        pool: &PgPool,
        media: &MediaClient,
        problem_id: &Uuid,
    ) -> AppResult<UploadTicket> {
        if !ProblemRepository::exists(pool, problem_id).await? {
            return Err(AppError::NotFound("Problem not found".to_string()));
        }

        Ok(media.create_upload_ticket(problem_id))
    }

    /// Record the metadata of a completed upload.
    ///
    /// The asset must actually exist at the provider; a dangling public id
    /// is a NotFound, not an upsert.
    pub async fn save_metadata(
        pool: &PgPool,
        media: &MediaClient,
        uploaded_by: &Uuid,
        problem_id: &Uuid,
        public_id: &str,
        secure_url: &str,
        duration: f64,
    ) -> AppResult<Video> {
        if !ProblemRepository::exists(pool, problem_id).await? {
            return Err(AppError::NotFound("Problem not found".to_string()));
        }

        if !media.video_exists(public_id).await? {
            return Err(AppError::NotFound(
                "No uploaded asset matches that public id".to_string(),
            ));
        }

        VideoRepository::upsert(pool, problem_id, public_id, secure_url, duration, uploaded_by).await
    }

    /// Delete a problem's editorial video, provider asset first.
    ///
    /// A provider failure aborts before the local row is touched; a local
    /// failure after the provider delete surfaces as its own error. Neither
    /// half is ever silently swallowed.
    pub async fn delete_video(pool: &PgPool, media: &MediaClient, problem_id: &Uuid) -> AppResult<()> {
        let video = VideoRepository::find_by_problem(pool, problem_id)
            .await?
            .ok_or_else(|| AppError::NotFound("No editorial video for that problem".to_string()))?;

        let destroyed = media.destroy_video(&video.public_id).await?;
        if !destroyed {
            tracing::warn!(
                problem_id = %problem_id,
                public_id = %video.public_id,
                "Editorial asset already absent at the media provider"
            );
        }

        let deleted = VideoRepository::delete_by_problem(pool, problem_id).await?;
        if !deleted {
            // Provider asset is gone but the row survived a concurrent change
            return Err(AppError::Conflict(
                "Provider asset deleted but the local record changed concurrently".to_string(),
            ));
        }

        Ok(())
    }
}
