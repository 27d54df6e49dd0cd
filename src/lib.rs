//! CodeArena - Competitive Programming Practice Platform
//!
//! This library provides the backend for CodeArena, a practice platform
//! where users browse problems, submit code for external judging, watch
//! editorial videos, and chat with an AI assistant about a problem.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs
//! - **Providers**: Clients for the external execution, media, and chat services

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod providers;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
