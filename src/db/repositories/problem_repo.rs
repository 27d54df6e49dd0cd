//! Problem repository

use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Problem};

/// Repository for problem database operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// Create a new problem
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        title: &str,
        description: &str,
        difficulty: &str,
        tag: &str,
        visible_test_cases: Value,
        hidden_test_cases: Value,
        start_code: Value,
        reference_solution: Value,
        author_id: &Uuid,
    ) -> AppResult<Problem> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            INSERT INTO problems (
                title, description, difficulty, tag,
                visible_test_cases, hidden_test_cases, start_code, reference_solution,
                author_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(difficulty)
        .bind(tag)
        .bind(visible_test_cases)
        .bind(hidden_test_cases)
        .bind(start_code)
        .bind(reference_solution)
        .bind(author_id)
        .fetch_one(pool)
        .await?;

        Ok(problem)
    }

    /// Find problem by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(problem)
    }

    /// Update problem; absent fields keep their stored values
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        title: Option<&str>,
        description: Option<&str>,
        difficulty: Option<&str>,
        tag: Option<&str>,
        visible_test_cases: Option<Value>,
        hidden_test_cases: Option<Value>,
        start_code: Option<Value>,
        reference_solution: Option<Value>,
    ) -> AppResult<Problem> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            UPDATE problems
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                difficulty = COALESCE($4, difficulty),
                tag = COALESCE($5, tag),
                visible_test_cases = COALESCE($6, visible_test_cases),
                hidden_test_cases = COALESCE($7, hidden_test_cases),
                start_code = COALESCE($8, start_code),
                reference_solution = COALESCE($9, reference_solution),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(difficulty)
        .bind(tag)
        .bind(visible_test_cases)
        .bind(hidden_test_cases)
        .bind(start_code)
        .bind(reference_solution)
        .fetch_one(pool)
        .await?;

        Ok(problem)
    }

    /// Delete problem. Dependent submissions, solved-set rows and the
    /// editorial video row go with it via ON DELETE CASCADE.
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM problems WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List problems with pagination and optional filters
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        difficulty: Option<&str>,
        tag: Option<&str>,
    ) -> AppResult<(Vec<Problem>, i64)> {
        let problems = sqlx::query_as::<_, Problem>(
            r#"
            SELECT * FROM problems
            WHERE
                ($1::text IS NULL OR difficulty = $1)
                AND ($2::text IS NULL OR tag = $2)
            ORDER BY created_at DESC
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(difficulty)
        .bind(tag)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM problems
            WHERE
                ($1::text IS NULL OR difficulty = $1)
                AND ($2::text IS NULL OR tag = $2)
            "#,
        )
        .bind(difficulty)
        .bind(tag)
        .fetch_one(pool)
        .await?;

        Ok((problems, count))
    }

    /// Fetch the problems in a given id set, preserving nothing about order
    pub async fn find_by_ids(pool: &PgPool, ids: &[Uuid]) -> AppResult<Vec<Problem>> {
        let problems = sqlx::query_as::<_, Problem>(
            r#"SELECT * FROM problems WHERE id = ANY($1)"#,
        )
        .bind(ids)
        .fetch_all(pool)
        .await?;

        Ok(problems)
    }

    /// Check whether a problem exists
    pub async fn exists(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM problems WHERE id = $1)"#)
                .bind(id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }
}
