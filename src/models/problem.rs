//! Problem model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::Language;

/// Problem database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub tag: String,
    pub visible_test_cases: Json<Vec<VisibleTestCase>>,
    pub hidden_test_cases: Json<Vec<HiddenTestCase>>,
    pub start_code: Json<Vec<StartCode>>,
    pub reference_solution: Json<Vec<ReferenceSolution>>,
    pub author_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Problem {
    /// All test cases, visible first, in stored order
    pub fn all_test_cases(&self) -> Vec<(&str, &str)> {
        self.visible_test_cases
            .iter()
            .map(|tc| (tc.input.as_str(), tc.output.as_str()))
            .chain(
                self.hidden_test_cases
                    .iter()
                    .map(|tc| (tc.input.as_str(), tc.output.as_str())),
            )
            .collect()
    }

}

/// A test case shown to users, with an explanation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleTestCase {
    pub input: String,
    pub output: String,
    pub explanation: String,
}

/// A test case used only for judging
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenTestCase {
    pub input: String,
    pub output: String,
}

/// Starter code for one language
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartCode {
    pub language: Language,
    pub initial_code: String,
}

/// Reference solution for one language
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceSolution {
    pub language: Language,
    pub complete_code: String,
}

/// Problem difficulty levels, ordered easiest to hardest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Problem category tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tag {
    Array,
    LinkedList,
    Graph,
    Dp,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::LinkedList => "linkedList",
            Self::Graph => "graph",
            Self::Dp => "dp",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
    }

    #[test]
    fn test_tag_wire_names() {
        assert_eq!(serde_json::to_string(&Tag::LinkedList).unwrap(), "\"linkedList\"");
        assert_eq!(serde_json::to_string(&Tag::Dp).unwrap(), "\"dp\"");
    }
}
