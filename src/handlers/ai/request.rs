//! AI chat request DTOs

use serde::Deserialize;

use crate::models::{StartCode, VisibleTestCase};
use crate::providers::ChatMessage;

/// Chat request: the conversation so far plus the problem context
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub test_cases: Vec<VisibleTestCase>,
    #[serde(default)]
    pub start_code: Vec<StartCode>,
}
