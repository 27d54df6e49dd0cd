//! AI assistant chat service
//!
//! A stateless relay: the problem context is rendered into a system
//! instruction, the conversation is forwarded, and the reply is returned
//! verbatim. Nothing is stored between requests.

use crate::{
    constants::MAX_CHAT_MESSAGES,
    error::{AppError, AppResult},
    handlers::ai::request::ChatRequest,
    models::{StartCode, VisibleTestCase},
    providers::ChatClient,
};

/// Chat service for business logic
pub struct ChatService;

impl ChatService {
    /// Relay a conversation about a problem to the model provider
    pub async fn chat(client: &ChatClient, payload: ChatRequest) -> AppResult<String> {
        if payload.messages.is_empty() {
            return Err(AppError::Validation("messages must not be empty".to_string()));
        }
        if payload.messages.len() > MAX_CHAT_MESSAGES {
            return Err(AppError::Validation(format!(
                "messages must not exceed {} entries",
                MAX_CHAT_MESSAGES
            )));
        }

        let instruction = Self::render_context(
            &payload.title,
            &payload.description,
            &payload.test_cases,
            &payload.start_code,
        );

        client.generate(&instruction, &payload.messages).await
    }

    /// Render the problem context into the system instruction
    fn render_context(
        title: &str,
        description: &str,
        test_cases: &[VisibleTestCase],
        start_code: &[StartCode],
    ) -> String {
        let mut out = String::new();

        out.push_str(
            "You are a tutoring assistant on a competitive programming platform. \
             Help the user reason about the problem below. Give hints before full \
             solutions, and keep answers focused on this problem.\n\n",
        );

        out.push_str(&format!("Problem: {}\n\n{}\n", title, description));

        if !test_cases.is_empty() {
            out.push_str("\nExamples:\n");
            for (i, tc) in test_cases.iter().enumerate() {
                out.push_str(&format!(
                    "Example {}:\nInput: {}\nOutput: {}\nExplanation: {}\n",
                    i + 1,
                    tc.input,
                    tc.output,
                    tc.explanation
                ));
            }
        }

        if !start_code.is_empty() {
            out.push_str("\nStarter code:\n");
            for sc in start_code {
                out.push_str(&format!("[{}]\n{}\n", sc.language.display_name(), sc.initial_code));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Language;

    #[test]
    fn test_context_contains_problem_and_examples() {
        let test_cases = vec![VisibleTestCase {
            input: "1 2".to_string(),
            output: "3".to_string(),
            explanation: "1 + 2 = 3".to_string(),
        }];
        let start_code = vec![StartCode {
            language: Language::Cpp,
            initial_code: "int main() {}".to_string(),
        }];

        let ctx = ChatService::render_context("Two Sum", "Add two numbers.", &test_cases, &start_code);

        assert!(ctx.contains("Problem: Two Sum"));
        assert!(ctx.contains("Add two numbers."));
        assert!(ctx.contains("Input: 1 2"));
        assert!(ctx.contains("[C++]"));
    }

    #[test]
    fn test_context_without_optional_sections() {
        let ctx = ChatService::render_context("Title", "Body", &[], &[]);
        assert!(!ctx.contains("Examples:"));
        assert!(!ctx.contains("Starter code:"));
    }
}
