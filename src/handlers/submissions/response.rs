//! Submission response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    models::{Submission, SubmissionStatus},
    services::{RunCase, RunEvaluation},
};

/// Per-case detail in a run-mode response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunCaseResponse {
    pub input: String,
    pub expected_output: String,
    pub actual_output: Option<String>,
    pub passed: bool,
}

impl From<RunCase> for RunCaseResponse {
    fn from(case: RunCase) -> Self {
        Self {
            input: case.input,
            expected_output: case.expected_output,
            actual_output: case.actual_output,
            passed: case.passed,
        }
    }
}

/// Run-mode response: per-case outcomes, nothing persisted
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResponse {
    pub success: bool,
    /// Maximum wall time across cases, in seconds
    pub runtime: f64,
    /// Maximum peak memory across cases, in kilobytes
    pub memory: i64,
    pub test_cases: Vec<RunCaseResponse>,
}

impl From<RunEvaluation> for RunResponse {
    fn from(eval: RunEvaluation) -> Self {
        Self {
            success: eval.outcome.status == SubmissionStatus::Accepted,
            runtime: eval.outcome.runtime_seconds,
            memory: eval.outcome.memory_kb,
            test_cases: eval.cases.into_iter().map(RunCaseResponse::from).collect(),
        }
    }
}

/// Submit-mode response: the persisted verdict
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub accepted: bool,
    pub status: String,
    pub passed_test_cases: i32,
    pub total_test_cases: i32,
    pub runtime: f64,
    pub memory: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One row of a user's submission history. The source code is included:
/// history is only ever the caller's own.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionView {
    pub id: Uuid,
    pub language: String,
    pub status: String,
    pub runtime: f64,
    pub memory: i64,
    pub test_cases_passed: i32,
    pub test_cases_total: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub code: String,
    pub created_at: DateTime<Utc>,
}

impl From<Submission> for SubmissionView {
    fn from(submission: Submission) -> Self {
        Self {
            id: submission.id,
            language: submission.language,
            status: submission.status,
            runtime: submission.runtime_seconds,
            memory: submission.memory_kb,
            test_cases_passed: submission.test_cases_passed,
            test_cases_total: submission.test_cases_total,
            error_message: submission.error_message,
            code: submission.source_code,
            created_at: submission.created_at,
        }
    }
}
