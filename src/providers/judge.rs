//! Code-execution provider client
//!
//! Submissions are executed by an external judging service. The backend
//! submits one batch entry per test case, receives a token per entry, and
//! polls the batch until every entry reaches a terminal state.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    config::JudgeConfig,
    error::{AppError, AppResult},
};

/// One execution request: source code run against a single test case
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionCase {
    pub source_code: String,
    pub language_id: u32,
    pub stdin: String,
    pub expected_output: String,
}

/// Terminal-or-not state of one executed case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStatus {
    InQueue,
    Processing,
    /// Output matched the expected output
    Accepted,
    /// Ran to completion, output mismatched
    WrongAnswer,
    /// Compile error, runtime error, or a resource limit hit
    Errored,
}

impl CaseStatus {
    /// Whether the provider is done with this case
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InQueue | Self::Processing)
    }

    /// Map the provider's numeric status id
    pub fn from_provider_id(id: i32) -> Self {
        match id {
            1 => Self::InQueue,
            2 => Self::Processing,
            3 => Self::Accepted,
            4 => Self::WrongAnswer,
            _ => Self::Errored,
        }
    }
}

/// Result of one executed case as reported by the provider
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub token: String,
    pub status: CaseStatus,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
    pub time_seconds: Option<f64>,
    pub memory_kb: Option<i64>,
}

impl CaseResult {
    /// The most useful diagnostic text the provider gave for a failed case
    pub fn error_text(&self) -> Option<&str> {
        self.compile_output
            .as_deref()
            .or(self.stderr.as_deref())
            .filter(|s| !s.is_empty())
    }
}

/// Seam between the evaluator and the external execution service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JudgeProvider: Send + Sync {
    /// Submit a batch of cases; returns one token per case, in order
    async fn submit_batch(&self, cases: &[ExecutionCase]) -> AppResult<Vec<String>>;

    /// Fetch the current results for a batch of tokens, in token order
    async fn fetch_batch(&self, tokens: &[String]) -> AppResult<Vec<CaseResult>>;
}

/// HTTP client for the execution provider
#[derive(Debug, Clone)]
pub struct JudgeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl JudgeClient {
    pub fn new(config: &JudgeConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build judge HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl JudgeProvider for JudgeClient {
    async fn submit_batch(&self, cases: &[ExecutionCase]) -> AppResult<Vec<String>> {
        let url = format!("{}/submissions/batch?base64_encoded=false", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("X-Auth-Token", &self.api_key)
            .json(&BatchSubmitRequest { submissions: cases })
            .send()
            .await
            .map_err(|e| AppError::Judge(format!("batch submit failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Judge(format!(
                "batch submit returned {}",
                response.status()
            )));
        }

        let tokens: Vec<TokenEnvelope> = response
            .json()
            .await
            .map_err(|e| AppError::Judge(format!("malformed batch submit response: {}", e)))?;

        Ok(tokens.into_iter().map(|t| t.token).collect())
    }

    async fn fetch_batch(&self, tokens: &[String]) -> AppResult<Vec<CaseResult>> {
        let url = format!(
            "{}/submissions/batch?tokens={}&base64_encoded=false&fields=token,status,stdout,stderr,compile_output,time,memory",
            self.base_url,
            tokens.join(",")
        );

        let response = self
            .client
            .get(&url)
            .header("X-Auth-Token", &self.api_key)
            .send()
            .await
            .map_err(|e| AppError::Judge(format!("batch fetch failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Judge(format!(
                "batch fetch returned {}",
                response.status()
            )));
        }

        let body: BatchFetchResponse = response
            .json()
            .await
            .map_err(|e| AppError::Judge(format!("malformed batch fetch response: {}", e)))?;

        Ok(body.submissions.into_iter().map(CaseResult::from).collect())
    }
}

#[derive(Serialize)]
struct BatchSubmitRequest<'a> {
    submissions: &'a [ExecutionCase],
}

#[derive(Deserialize)]
struct TokenEnvelope {
    token: String,
}

#[derive(Deserialize)]
struct BatchFetchResponse {
    submissions: Vec<WireResult>,
}

#[derive(Deserialize)]
struct WireResult {
    token: String,
    status: WireStatus,
    stdout: Option<String>,
    stderr: Option<String>,
    compile_output: Option<String>,
    /// Wall time in seconds, serialized by the provider as a decimal string
    time: Option<String>,
    /// Peak memory in kilobytes
    memory: Option<i64>,
}

#[derive(Deserialize)]
struct WireStatus {
    id: i32,
}

impl From<WireResult> for CaseResult {
    fn from(wire: WireResult) -> Self {
        Self {
            token: wire.token,
            status: CaseStatus::from_provider_id(wire.status.id),
            stdout: wire.stdout,
            stderr: wire.stderr,
            compile_output: wire.compile_output,
            time_seconds: wire.time.as_deref().and_then(|t| t.parse().ok()),
            memory_kb: wire.memory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(CaseStatus::from_provider_id(1), CaseStatus::InQueue);
        assert_eq!(CaseStatus::from_provider_id(2), CaseStatus::Processing);
        assert_eq!(CaseStatus::from_provider_id(3), CaseStatus::Accepted);
        assert_eq!(CaseStatus::from_provider_id(4), CaseStatus::WrongAnswer);
        for id in [5, 6, 7, 11, 13] {
            assert_eq!(CaseStatus::from_provider_id(id), CaseStatus::Errored);
        }
        assert!(!CaseStatus::InQueue.is_terminal());
        assert!(CaseStatus::Errored.is_terminal());
    }

    #[test]
    fn test_fetch_response_parsing() {
        let raw = r#"{
            "submissions": [
                {
                    "token": "abc-123",
                    "status": {"id": 3, "description": "Accepted"},
                    "stdout": "42\n",
                    "stderr": null,
                    "compile_output": null,
                    "time": "0.012",
                    "memory": 2048
                },
                {
                    "token": "def-456",
                    "status": {"id": 6, "description": "Compilation Error"},
                    "stdout": null,
                    "stderr": null,
                    "compile_output": "main.cpp:1:1: error",
                    "time": null,
                    "memory": null
                }
            ]
        }"#;

        let parsed: BatchFetchResponse = serde_json::from_str(raw).unwrap();
        let results: Vec<CaseResult> = parsed.submissions.into_iter().map(CaseResult::from).collect();

        assert_eq!(results[0].status, CaseStatus::Accepted);
        assert_eq!(results[0].time_seconds, Some(0.012));
        assert_eq!(results[0].memory_kb, Some(2048));

        assert_eq!(results[1].status, CaseStatus::Errored);
        assert_eq!(results[1].error_text(), Some("main.cpp:1:1: error"));
    }
}
