//! Problem request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_PROBLEM_DESCRIPTION_LENGTH, MAX_PROBLEM_TITLE_LENGTH};
use crate::models::{
    Difficulty, HiddenTestCase, ReferenceSolution, StartCode, Tag, VisibleTestCase,
};

/// Create problem request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProblemRequest {
    #[validate(length(min = 1, max = MAX_PROBLEM_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_PROBLEM_DESCRIPTION_LENGTH))]
    pub description: String,

    pub difficulty: Difficulty,

    pub tag: Tag,

    /// Test cases shown to users, with explanations
    #[validate(length(min = 1))]
    pub visible_test_cases: Vec<VisibleTestCase>,

    /// Test cases used only for judging
    #[validate(length(min = 1))]
    pub hidden_test_cases: Vec<HiddenTestCase>,

    /// Starter code, one entry per supported language
    pub start_code: Vec<StartCode>,

    /// Reference solutions, one entry per supported language
    pub reference_solution: Vec<ReferenceSolution>,
}

/// Update problem request; absent fields keep their stored values
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProblemRequest {
    #[validate(length(min = 1, max = MAX_PROBLEM_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = MAX_PROBLEM_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    pub difficulty: Option<Difficulty>,
    pub tag: Option<Tag>,

    #[validate(length(min = 1))]
    pub visible_test_cases: Option<Vec<VisibleTestCase>>,

    #[validate(length(min = 1))]
    pub hidden_test_cases: Option<Vec<HiddenTestCase>>,

    pub start_code: Option<Vec<StartCode>>,
    pub reference_solution: Option<Vec<ReferenceSolution>>,
}

/// List problems query parameters
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProblemsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub tag: Option<Tag>,
}
