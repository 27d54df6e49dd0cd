//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Name of the cookie carrying the session credential
pub const SESSION_COOKIE_NAME: &str = "token";

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Maximum first-name length
pub const MAX_FIRST_NAME_LENGTH: u64 = 64;

/// Key prefix for revoked session tokens in Redis
pub const REVOKED_TOKEN_PREFIX: &str = "revoked";

// =============================================================================
// JUDGE PROVIDER DEFAULTS
// =============================================================================

/// Default interval between verdict polls, in milliseconds
pub const DEFAULT_JUDGE_POLL_INTERVAL_MS: u64 = 1000;

/// Default total wait budget for a batch of verdicts, in milliseconds
pub const DEFAULT_JUDGE_WAIT_BUDGET_MS: u64 = 20_000;

// =============================================================================
// MEDIA PROVIDER DEFAULTS
// =============================================================================

/// Folder prefix for editorial video assets at the media provider
pub const MEDIA_EDITORIAL_FOLDER: &str = "editorials";

/// Length of the random nonce appended to generated public ids
pub const MEDIA_PUBLIC_ID_NONCE_LENGTH: usize = 12;

// =============================================================================
// AI PROVIDER DEFAULTS
// =============================================================================

/// Default request timeout for the chat provider, in seconds
pub const DEFAULT_AI_REQUEST_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const USER: &str = "user";

    /// All user roles
    pub const ALL: &[&str] = &[ADMIN, USER];
}

// =============================================================================
// RATE LIMITING
// =============================================================================

/// Rate limiting configuration
pub mod rate_limits {
    /// User/session endpoints - max requests
    pub const USER_MAX_REQUESTS: i64 = 10;
    /// User/session endpoints - window in seconds
    pub const USER_WINDOW_SECS: i64 = 60;

    /// Submission endpoints - max requests
    pub const SUBMISSION_MAX_REQUESTS: i64 = 10;
    /// Submission endpoints - window in seconds
    pub const SUBMISSION_WINDOW_SECS: i64 = 60;

    /// General API - max requests
    pub const GENERAL_MAX_REQUESTS: i64 = 100;
    /// General API - window in seconds
    pub const GENERAL_WINDOW_SECS: i64 = 60;
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum problem title length
pub const MAX_PROBLEM_TITLE_LENGTH: u64 = 256;

/// Maximum problem description length
pub const MAX_PROBLEM_DESCRIPTION_LENGTH: u64 = 65535;

/// Maximum source code size in bytes (64 KB)
pub const MAX_SOURCE_CODE_SIZE: u64 = 64 * 1024;

/// Maximum number of messages accepted in one chat request
pub const MAX_CHAT_MESSAGES: usize = 50;
