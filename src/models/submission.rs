//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Submission database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub user_id: Uuid,
    pub problem_id: Uuid,
    #[serde(skip_serializing)]
    pub source_code: String,
    pub language: String,
    pub status: String,
    pub runtime_seconds: f64,
    pub memory_kb: i64,
    pub test_cases_passed: i32,
    pub test_cases_total: i32,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Submission status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    Accepted,
    WrongAnswer,
    RuntimeError,
}

impl SubmissionStatus {
    /// Get status as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::WrongAnswer => "wrong_answer",
            Self::RuntimeError => "runtime_error",
        }
    }

    /// Parse status from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "wrong_answer" => Some(Self::WrongAnswer),
            "runtime_error" => Some(Self::RuntimeError),
            _ => None,
        }
    }

    /// Check if this is a terminal status (judging complete)
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Check if this status means the solution was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for s in ["pending", "accepted", "wrong_answer", "runtime_error"] {
            assert_eq!(SubmissionStatus::from_str(s).unwrap().as_str(), s);
        }
        assert_eq!(SubmissionStatus::from_str("compiling"), None);
    }

    #[test]
    fn test_terminality() {
        assert!(!SubmissionStatus::Pending.is_terminal());
        assert!(SubmissionStatus::Accepted.is_terminal());
        assert!(SubmissionStatus::WrongAnswer.is_terminal());
        assert!(SubmissionStatus::RuntimeError.is_terminal());
    }
}
