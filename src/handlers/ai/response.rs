//! AI chat response DTOs

use serde::Serialize;

/// The model's reply, verbatim
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub message: String,
}
