//! Chat model provider client
//!
//! Conversations are relayed to an external language model. The problem
//! context travels as a system instruction; nothing is persisted here.

use std::time::Duration;

use anyhow::Context;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    config::AiConfig,
    error::{AppError, AppResult},
};

/// A single conversation turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub parts: Vec<ChatPart>,
}

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One text fragment of a turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatPart {
    pub text: String,
}

/// HTTP client for the chat model provider
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl ChatClient {
    pub fn new(config: &AiConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build chat HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    /// Send the conversation and return the model's reply verbatim.
    ///
    /// Any provider failure collapses into `AiUnavailable`; the details are
    /// logged here and never reach the caller.
    pub async fn generate(
        &self,
        system_instruction: &str,
        messages: &[ChatMessage],
    ) -> AppResult<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let body = GenerateRequest {
            system_instruction: Instruction {
                parts: vec![ChatPart {
                    text: system_instruction.to_string(),
                }],
            },
            contents: messages,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Chat provider unreachable: {}", e);
                AppError::AiUnavailable
            })?;

        if !response.status().is_success() {
            tracing::error!("Chat provider returned {}", response.status());
            return Err(AppError::AiUnavailable);
        }

        let parsed: GenerateResponse = response.json().await.map_err(|e| {
            tracing::error!("Malformed chat provider response: {}", e);
            AppError::AiUnavailable
        })?;

        let reply = parsed
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                tracing::error!("Chat provider returned no candidates");
                AppError::AiUnavailable
            })?;

        Ok(reply)
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    system_instruction: Instruction,
    contents: &'a [ChatMessage],
}

#[derive(Serialize)]
struct Instruction {
    parts: Vec<ChatPart>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ChatPart>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_extraction_shape() {
        let raw = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Use a hash map."}]}}
            ]
        }"#;

        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        let text: String = parsed.candidates[0]
            .content
            .parts
            .iter()
            .map(|p| p.text.clone())
            .collect();
        assert_eq!(text, "Use a hash map.");
    }

    #[test]
    fn test_empty_candidates_parse() {
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_string(&ChatRole::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&ChatRole::Model).unwrap(), "\"model\"");
    }
}
