//! Clients for the external providers
//!
//! Three collaborators live outside this codebase: the code-execution
//! service, the media host, and the chat model. Each gets a thin reqwest
//! client here; everything above this layer is provider-agnostic.

pub mod chat;
pub mod judge;
pub mod media;

pub use chat::{ChatClient, ChatMessage, ChatPart, ChatRole};
pub use judge::{CaseResult, CaseStatus, ExecutionCase, JudgeClient, JudgeProvider};
pub use media::{MediaClient, UploadTicket};

#[cfg(test)]
pub use judge::MockJudgeProvider;
