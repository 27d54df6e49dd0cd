//! Domain models

mod language;
mod problem;
mod submission;
mod user;
mod video;

pub use language::Language;
pub use problem::{
    Difficulty, HiddenTestCase, Problem, ReferenceSolution, StartCode, Tag, VisibleTestCase,
};
pub use submission::{Submission, SubmissionStatus};
pub use user::User;
pub use video::Video;
