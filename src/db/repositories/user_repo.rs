//! User repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::User};

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    pub async fn create(
        pool: &PgPool,
        first_name: &str,
        email: &str,
        password_hash: &str,
        role: &str,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(first_name)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find user by email (for login and duplicate checks)
    pub async fn find_by_email(pool: &PgPool, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Add a problem to a user's solved set. A no-op when already present,
    /// and safe under concurrent submit calls for the same pair.
    pub async fn add_solved_problem(
        pool: &PgPool,
        user_id: &Uuid,
        problem_id: &Uuid,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO solved_problems (user_id, problem_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, problem_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(problem_id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Ids of every problem the user has solved, oldest solve first
    pub async fn solved_problem_ids(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<Uuid>> {
        let ids: Vec<Uuid> = sqlx::query_scalar(
            r#"
            SELECT problem_id FROM solved_problems
            WHERE user_id = $1
            ORDER BY solved_at
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(ids)
    }
}
