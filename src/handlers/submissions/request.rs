//! Submission request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_SOURCE_CODE_SIZE;
use crate::models::Language;

/// Body of run and submit requests
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionBody {
    #[validate(length(min = 1, max = MAX_SOURCE_CODE_SIZE))]
    pub code: String,

    pub language: Language,
}
