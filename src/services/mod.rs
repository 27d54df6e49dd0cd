//! Business logic services

mod auth_service;
mod chat_service;
mod problem_service;
mod submission_service;
mod video_service;

pub use auth_service::{AuthService, Claims};
pub use chat_service::ChatService;
pub use problem_service::ProblemService;
pub use submission_service::{EvalOutcome, RunCase, RunEvaluation, SubmissionService};
pub use video_service::VideoService;
