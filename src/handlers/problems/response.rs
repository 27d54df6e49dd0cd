//! Problem response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{
    HiddenTestCase, Problem, ReferenceSolution, StartCode, Video, VisibleTestCase,
};

/// Full problem detail, as returned by getById.
///
/// Hidden test cases are included only for admin callers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub tag: String,
    pub visible_test_cases: Vec<VisibleTestCase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_test_cases: Option<Vec<HiddenTestCase>>,
    pub start_code: Vec<StartCode>,
    pub reference_solution: Vec<ReferenceSolution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProblemResponse {
    pub fn from_parts(problem: Problem, video: Option<Video>, include_hidden: bool) -> Self {
        Self {
            id: problem.id,
            title: problem.title,
            description: problem.description,
            difficulty: problem.difficulty,
            tag: problem.tag,
            visible_test_cases: problem.visible_test_cases.0,
            hidden_test_cases: include_hidden.then_some(problem.hidden_test_cases.0),
            start_code: problem.start_code.0,
            reference_solution: problem.reference_solution.0,
            secure_url: video.as_ref().map(|v| v.secure_url.clone()),
            duration: video.as_ref().map(|v| v.duration),
            created_at: problem.created_at,
            updated_at: problem.updated_at,
        }
    }
}

/// Compact problem row for listings
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemSummary {
    pub id: Uuid,
    pub title: String,
    pub difficulty: String,
    pub tag: String,
}

impl From<Problem> for ProblemSummary {
    fn from(problem: Problem) -> Self {
        Self {
            id: problem.id,
            title: problem.title,
            difficulty: problem.difficulty,
            tag: problem.tag,
        }
    }
}

/// Paginated problem listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemsListResponse {
    pub problems: Vec<ProblemSummary>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Deletion confirmation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProblemResponse {
    pub message: String,
}
