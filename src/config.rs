//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_AI_REQUEST_TIMEOUT_SECS, DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_JUDGE_POLL_INTERVAL_MS,
    DEFAULT_JUDGE_WAIT_BUDGET_MS, DEFAULT_JWT_EXPIRY_HOURS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub jwt: JwtConfig,
    pub cors: CorsConfig,
    pub judge: JudgeConfig,
    pub media: MediaConfig,
    pub ai: AiConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Redis configuration
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
}

/// JWT session configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiry_hours: i64,
}

/// CORS configuration: the fixed set of browser origins allowed to call the API
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// Code-execution provider configuration
#[derive(Debug, Clone)]
pub struct JudgeConfig {
    pub base_url: String,
    pub api_key: String,
    /// Interval between verdict polls
    pub poll_interval_ms: u64,
    /// Total wait budget for a batch before giving up
    pub wait_budget_ms: u64,
}

/// Media hosting provider configuration
#[derive(Debug, Clone)]
pub struct MediaConfig {
    pub base_url: String,
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

/// Chat model provider configuration
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            redis: RedisConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            cors: CorsConfig::from_env()?,
            judge: JudgeConfig::from_env()?,
            media: MediaConfig::from_env()?,
            ai: AiConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl RedisConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        })
    }
}

impl JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET".to_string()))?,
            expiry_hours: env::var("JWT_EXPIRY_HOURS")
                .unwrap_or_else(|_| DEFAULT_JWT_EXPIRY_HOURS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JWT_EXPIRY_HOURS".to_string()))?,
        })
    }
}

impl CorsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".to_string());

        let allowed_origins: Vec<String> = raw
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        if allowed_origins.is_empty() {
            return Err(ConfigError::InvalidValue("CORS_ALLOWED_ORIGINS".to_string()));
        }

        Ok(Self { allowed_origins })
    }
}

impl JudgeConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env::var("JUDGE_BASE_URL")
                .map_err(|_| ConfigError::Missing("JUDGE_BASE_URL".to_string()))?,
            api_key: env::var("JUDGE_API_KEY")
                .map_err(|_| ConfigError::Missing("JUDGE_API_KEY".to_string()))?,
            poll_interval_ms: env::var("JUDGE_POLL_INTERVAL_MS")
                .unwrap_or_else(|_| DEFAULT_JUDGE_POLL_INTERVAL_MS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JUDGE_POLL_INTERVAL_MS".to_string()))?,
            wait_budget_ms: env::var("JUDGE_WAIT_BUDGET_MS")
                .unwrap_or_else(|_| DEFAULT_JUDGE_WAIT_BUDGET_MS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JUDGE_WAIT_BUDGET_MS".to_string()))?,
        })
    }
}

impl MediaConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env::var("MEDIA_BASE_URL")
                .unwrap_or_else(|_| "https://api.cloudinary.com".to_string()),
            cloud_name: env::var("MEDIA_CLOUD_NAME")
                .map_err(|_| ConfigError::Missing("MEDIA_CLOUD_NAME".to_string()))?,
            api_key: env::var("MEDIA_API_KEY")
                .map_err(|_| ConfigError::Missing("MEDIA_API_KEY".to_string()))?,
            api_secret: env::var("MEDIA_API_SECRET")
                .map_err(|_| ConfigError::Missing("MEDIA_API_SECRET".to_string()))?,
        })
    }
}

impl AiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env::var("AI_BASE_URL").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1beta".to_string()
            }),
            api_key: env::var("AI_API_KEY").map_err(|_| ConfigError::Missing("AI_API_KEY".to_string()))?,
            model: env::var("AI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            request_timeout_secs: env::var("AI_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_AI_REQUEST_TIMEOUT_SECS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("AI_REQUEST_TIMEOUT_SECS".to_string()))?,
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_origin_list_parsing() {
        let raw = "http://localhost:5173, https://app.example.com ,";
        let origins: Vec<String> = raw
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();
        assert_eq!(origins, vec!["http://localhost:5173", "https://app.example.com"]);
    }
}
