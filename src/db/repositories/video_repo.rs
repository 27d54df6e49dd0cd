//! Editorial video repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Video};

/// Repository for editorial video database operations
pub struct VideoRepository;

impl VideoRepository {
    /// Insert or replace the editorial video for a problem
    pub async fn upsert(
        pool: &PgPool,
        problem_id: &Uuid,
        public_id: &str,
        secure_url: &str,
        duration: f64,
        uploaded_by: &Uuid,
    ) -> AppResult<Video> {
        let video = sqlx::query_as::<_, Video>(
            r#"
            INSERT INTO videos (problem_id, public_id, secure_url, duration, uploaded_by)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (problem_id) DO UPDATE
            SET public_id = EXCLUDED.public_id,
                secure_url = EXCLUDED.secure_url,
                duration = EXCLUDED.duration,
                uploaded_by = EXCLUDED.uploaded_by
            RETURNING *
            "#,
        )
        .bind(problem_id)
        .bind(public_id)
        .bind(secure_url)
        .bind(duration)
        .bind(uploaded_by)
        .fetch_one(pool)
        .await?;

        Ok(video)
    }

    /// Find the editorial video for a problem
    pub async fn find_by_problem(pool: &PgPool, problem_id: &Uuid) -> AppResult<Option<Video>> {
        let video = sqlx::query_as::<_, Video>(
            r#"SELECT * FROM videos WHERE problem_id = $1"#,
        )
        .bind(problem_id)
        .fetch_optional(pool)
        .await?;

        Ok(video)
    }

    /// Delete the editorial video for a problem
    pub async fn delete_by_problem(pool: &PgPool, problem_id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM videos WHERE problem_id = $1"#)
            .bind(problem_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
