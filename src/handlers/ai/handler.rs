//! AI chat handler implementations

use axum::{Json, extract::State};

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::ChatService,
    state::AppState,
};

use super::{request::ChatRequest, response::ChatResponse};

/// Relay a conversation about a problem to the AI assistant
pub async fn chat(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    tracing::info!(
        user_id = %auth_user.id,
        messages = payload.messages.len(),
        "AI chat requested"
    );

    let message = ChatService::chat(state.chat(), payload).await?;

    Ok(Json(ChatResponse { message }))
}
