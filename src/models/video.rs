//! Editorial video model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Editorial video database model, one per problem
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub problem_id: Uuid,
    /// Asset identifier at the media provider
    pub public_id: String,
    pub secure_url: String,
    /// Duration in seconds as reported by the provider
    pub duration: f64,
    pub uploaded_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}
