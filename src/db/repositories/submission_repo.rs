//! Submission repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Submission};

/// Repository for submission database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Create a new pending submission
    pub async fn create(
        pool: &PgPool,
        user_id: &Uuid,
        problem_id: &Uuid,
        source_code: &str,
        language: &str,
        test_cases_total: i32,
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (user_id, problem_id, source_code, language, test_cases_total)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(problem_id)
        .bind(source_code)
        .bind(language)
        .bind(test_cases_total)
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }

    /// Find submission by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Submission>> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"SELECT * FROM submissions WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(submission)
    }

    /// Record the terminal verdict for a submission. Rows that already hold
    /// a terminal status are left untouched.
    #[allow(clippy::too_many_arguments)]
    pub async fn record_verdict(
        pool: &PgPool,
        id: &Uuid,
        status: &str,
        runtime_seconds: f64,
        memory_kb: i64,
        test_cases_passed: i32,
        error_message: Option<&str>,
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            UPDATE submissions
            SET
                status = $2,
                runtime_seconds = $3,
                memory_kb = $4,
                test_cases_passed = $5,
                error_message = $6
            WHERE id = $1 AND status = 'pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(runtime_seconds)
        .bind(memory_kb)
        .bind(test_cases_passed)
        .bind(error_message)
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }

    /// A user's submissions for one problem, newest first
    pub async fn list_for_user_problem(
        pool: &PgPool,
        user_id: &Uuid,
        problem_id: &Uuid,
    ) -> AppResult<Vec<Submission>> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT * FROM submissions
            WHERE user_id = $1 AND problem_id = $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(problem_id)
        .fetch_all(pool)
        .await?;

        Ok(submissions)
    }
}
