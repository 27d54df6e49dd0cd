//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use redis::aio::ConnectionManager;
use sqlx::PgPool;

use crate::config::Config;
use crate::providers::{ChatClient, JudgeProvider, MediaClient};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    pub db: PgPool,

    /// Redis connection manager
    pub redis: ConnectionManager,

    /// Code-execution provider
    pub judge: Arc<dyn JudgeProvider>,

    /// Media hosting provider
    pub media: MediaClient,

    /// Chat model provider
    pub chat: ChatClient,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        db: PgPool,
        redis: ConnectionManager,
        judge: Arc<dyn JudgeProvider>,
        media: MediaClient,
        chat: ChatClient,
        config: Config,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                db,
                redis,
                judge,
                media,
                chat,
                config,
            }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get a clone of the Redis connection manager
    pub fn redis(&self) -> ConnectionManager {
        self.inner.redis.clone()
    }

    /// Get a reference to the code-execution provider
    pub fn judge(&self) -> &Arc<dyn JudgeProvider> {
        &self.inner.judge
    }

    /// Get a reference to the media provider client
    pub fn media(&self) -> &MediaClient {
        &self.inner.media
    }

    /// Get a reference to the chat provider client
    pub fn chat(&self) -> &ChatClient {
        &self.inner.chat
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
