//! Problem service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::Config,
    db::repositories::{ProblemRepository, UserRepository, VideoRepository},
    error::{AppError, AppResult},
    handlers::problems::request::{CreateProblemRequest, UpdateProblemRequest},
    models::{Problem, SubmissionStatus, Video},
    providers::{JudgeProvider, MediaClient},
    utils::validation,
};

use super::SubmissionService;

/// Serialize an optional update field for a JSONB column
fn to_json<T: serde::Serialize>(value: &Option<T>) -> AppResult<Option<serde_json::Value>> {
    match value {
        Some(v) => Ok(Some(
            serde_json::to_value(v).map_err(|e| AppError::Internal(e.into()))?,
        )),
        None => Ok(None),
    }
}

/// Problem service for business logic
pub struct ProblemService;

impl ProblemService {
    /// Create a new problem.
    ///
    /// Starter code and reference solutions must each cover the supported
    /// language set exactly, and every reference solution must pass the
    /// problem's own test cases before the problem is persisted.
    pub async fn create_problem(
        pool: &PgPool,
        judge: &dyn JudgeProvider,
        config: &Config,
        author_id: &Uuid,
        payload: CreateProblemRequest,
    ) -> AppResult<Problem> {
        let start_langs: Vec<_> = payload.start_code.iter().map(|sc| sc.language).collect();
        validation::validate_language_coverage(&start_langs)
            .map_err(|e| AppError::Validation(format!("startCode: {}", e)))?;

        let reference_langs: Vec<_> = payload
            .reference_solution
            .iter()
            .map(|rs| rs.language)
            .collect();
        validation::validate_language_coverage(&reference_langs)
            .map_err(|e| AppError::Validation(format!("referenceSolution: {}", e)))?;

        let io: Vec<(&str, &str)> = payload
            .visible_test_cases
            .iter()
            .map(|tc| (tc.input.as_str(), tc.output.as_str()))
            .chain(
                payload
                    .hidden_test_cases
                    .iter()
                    .map(|tc| (tc.input.as_str(), tc.output.as_str())),
            )
            .collect();

        for reference in &payload.reference_solution {
            let results = SubmissionService::execute(
                judge,
                config,
                &reference.complete_code,
                reference.language,
                &io,
            )
            .await?;

            let outcome = SubmissionService::aggregate(&results);
            if outcome.status != SubmissionStatus::Accepted {
                return Err(AppError::Validation(format!(
                    "Reference solution for {} fails the test cases ({}/{} passed)",
                    reference.language, outcome.passed, outcome.total
                )));
            }
        }

        ProblemRepository::create(
            pool,
            &payload.title,
            &payload.description,
            payload.difficulty.as_str(),
            payload.tag.as_str(),
            serde_json::to_value(&payload.visible_test_cases)
                .map_err(|e| AppError::Internal(e.into()))?,
            serde_json::to_value(&payload.hidden_test_cases)
                .map_err(|e| AppError::Internal(e.into()))?,
            serde_json::to_value(&payload.start_code).map_err(|e| AppError::Internal(e.into()))?,
            serde_json::to_value(&payload.reference_solution)
                .map_err(|e| AppError::Internal(e.into()))?,
            author_id,
        )
        .await
    }

    /// Get a problem with its editorial video, if one exists
    pub async fn get_problem(pool: &PgPool, id: &Uuid) -> AppResult<(Problem, Option<Video>)> {
        let problem = ProblemRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))?;

        let video = VideoRepository::find_by_problem(pool, id).await?;

        Ok((problem, video))
    }

    /// Update a problem; per-language code lists are revalidated when replaced
    pub async fn update_problem(
        pool: &PgPool,
        id: &Uuid,
        payload: UpdateProblemRequest,
    ) -> AppResult<Problem> {
        if !ProblemRepository::exists(pool, id).await? {
            return Err(AppError::NotFound("Problem not found".to_string()));
        }

        if let Some(start_code) = &payload.start_code {
            let langs: Vec<_> = start_code.iter().map(|sc| sc.language).collect();
            validation::validate_language_coverage(&langs)
                .map_err(|e| AppError::Validation(format!("startCode: {}", e)))?;
        }

        if let Some(reference) = &payload.reference_solution {
            let langs: Vec<_> = reference.iter().map(|rs| rs.language).collect();
            validation::validate_language_coverage(&langs)
                .map_err(|e| AppError::Validation(format!("referenceSolution: {}", e)))?;
        }

        ProblemRepository::update(
            pool,
            id,
            payload.title.as_deref(),
            payload.description.as_deref(),
            payload.difficulty.map(|d| d.as_str()),
            payload.tag.map(|t| t.as_str()),
            to_json(&payload.visible_test_cases)?,
            to_json(&payload.hidden_test_cases)?,
            to_json(&payload.start_code)?,
            to_json(&payload.reference_solution)?,
        )
        .await
    }

    /// Delete a problem.
    ///
    /// Submissions, solved-set rows and the video row cascade away with the
    /// problem. An editorial asset at the media provider is destroyed first;
    /// a provider failure aborts the whole delete so no remote asset is
    /// silently orphaned.
    pub async fn delete_problem(pool: &PgPool, media: &MediaClient, id: &Uuid) -> AppResult<()> {
        if let Some(video) = VideoRepository::find_by_problem(pool, id).await? {
            let destroyed = media.destroy_video(&video.public_id).await?;
            if !destroyed {
                tracing::warn!(
                    problem_id = %id,
                    public_id = %video.public_id,
                    "Editorial asset already absent at the media provider"
                );
            }
        }

        let deleted = ProblemRepository::delete(pool, id).await?;
        if !deleted {
            return Err(AppError::NotFound("Problem not found".to_string()));
        }

        Ok(())
    }

    /// List problems with pagination and optional difficulty/tag filters
    pub async fn list_problems(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        difficulty: Option<&str>,
        tag: Option<&str>,
    ) -> AppResult<(Vec<Problem>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        ProblemRepository::list(pool, offset, limit, difficulty, tag).await
    }

    /// Problems in the caller's solved set
    pub async fn solved_problems(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<Problem>> {
        let ids = UserRepository::solved_problem_ids(pool, user_id).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        ProblemRepository::find_by_ids(pool, &ids).await
    }
}
