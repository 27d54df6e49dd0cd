//! Editorial video request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Metadata of a completed upload, reported back by the client
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveVideoRequest {
    pub problem_id: Uuid,

    /// Asset identifier at the media provider
    #[validate(length(min = 1))]
    pub public_id: String,

    #[validate(url)]
    pub secure_url: String,

    /// Duration in seconds as reported by the provider
    #[validate(range(min = 0.0))]
    pub duration: f64,
}
