//! Authentication and session service

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::Config,
    constants::REVOKED_TOKEN_PREFIX,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
    utils::{crypto, validation},
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new account and issue a session token
    pub async fn register(
        pool: &PgPool,
        config: &Config,
        first_name: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> AppResult<(User, String)> {
        validation::validate_password(password).map_err(|e| AppError::Validation(e.to_string()))?;

        // Check if email exists
        if UserRepository::find_by_email(pool, email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        // Hash password
        let password_hash = Self::hash_password(password)?;

        // Create user
        let user = UserRepository::create(pool, first_name, email, &password_hash, role).await?;

        let token = Self::generate_token(&user, config)?;

        Ok((user, token))
    }

    /// Login with email and password.
    ///
    /// An unknown email and a wrong password fail identically so that the
    /// response does not leak whether the email is registered.
    pub async fn login(
        pool: &PgPool,
        config: &Config,
        email: &str,
        password: &str,
    ) -> AppResult<(User, String)> {
        let user = UserRepository::find_by_email(pool, email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        let token = Self::generate_token(&user, config)?;

        Ok((user, token))
    }

    /// Revoke the presented session token.
    ///
    /// The token's hash goes on the revocation list with a TTL equal to the
    /// token's remaining lifetime, after which Redis sweeps the entry; the
    /// list never outlives the tokens it blocks.
    pub async fn logout(mut redis: ConnectionManager, token: &str, claims: &Claims) -> AppResult<()> {
        let remaining = claims.exp - Utc::now().timestamp();
        if remaining <= 0 {
            // Already expired, nothing to revoke
            return Ok(());
        }

        let key = format!("{}:{}", REVOKED_TOKEN_PREFIX, crypto::hash_string(token));
        redis.set_ex::<_, _, ()>(&key, "1", remaining as u64).await?;

        Ok(())
    }

    /// Check whether a token has been revoked
    pub async fn is_revoked(mut redis: ConnectionManager, token: &str) -> AppResult<bool> {
        let key = format!("{}:{}", REVOKED_TOKEN_PREFIX, crypto::hash_string(token));
        let revoked: bool = redis.exists(&key).await?;
        Ok(revoked)
    }

    /// Get user by ID
    pub async fn get_user_by_id(pool: &PgPool, user_id: &Uuid) -> AppResult<Option<User>> {
        UserRepository::find_by_id(pool, user_id).await
    }

    /// Verify a session token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Hash password using Argon2
    fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Generate a session token for a user
    pub fn generate_token(user: &User, config: &Config) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(config.jwt.expiry_hours);

        let claims = Claims {
            sub: user.id.to_string(),
            role: user.role.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user(role: &str) -> User {
        User {
            id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: String::new(),
            role: role.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn test_config(secret: &str) -> Config {
        let mut config = config_with_defaults();
        config.jwt.secret = secret.to_string();
        config
    }

    fn config_with_defaults() -> Config {
        use crate::config::*;
        Config {
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 0,
                rust_log: "info".into(),
            },
            database: DatabaseConfig {
                url: "postgres://localhost/test".into(),
                max_connections: 1,
            },
            redis: RedisConfig {
                url: "redis://localhost".into(),
            },
            jwt: JwtConfig {
                secret: "secret".into(),
                expiry_hours: 24,
            },
            cors: CorsConfig {
                allowed_origins: vec!["http://localhost:5173".into()],
            },
            judge: JudgeConfig {
                base_url: "http://judge.local".into(),
                api_key: "k".into(),
                poll_interval_ms: 10,
                wait_budget_ms: 100,
            },
            media: MediaConfig {
                base_url: "http://media.local".into(),
                cloud_name: "demo".into(),
                api_key: "k".into(),
                api_secret: "s".into(),
            },
            ai: AiConfig {
                base_url: "http://ai.local".into(),
                api_key: "k".into(),
                model: "m".into(),
                request_timeout_secs: 5,
            },
        }
    }

    #[test]
    fn test_token_round_trip() {
        let config = test_config("token-test-secret");
        let user = test_user("admin");

        let token = AuthService::generate_token(&user, &config).unwrap();
        let claims = AuthService::verify_token(&token, &config.jwt.secret).unwrap();

        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_rejects_wrong_secret() {
        let config = test_config("right-secret");
        let user = test_user("user");

        let token = AuthService::generate_token(&user, &config).unwrap();
        assert!(AuthService::verify_token(&token, "wrong-secret").is_err());
    }

    #[test]
    fn test_password_hash_and_verify() {
        let hash = AuthService::hash_password("Password123").unwrap();
        assert!(AuthService::verify_password("Password123", &hash).unwrap());
        assert!(!AuthService::verify_password("Password124", &hash).unwrap());
    }
}
