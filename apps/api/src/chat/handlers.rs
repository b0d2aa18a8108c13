//! Axum route handlers for `/api/chat`.

use axum::{body::Bytes, extract::State, Json};
use tracing::debug;

use crate::errors::AppError;
use crate::models::chat::{ChatRequest, ChatResponse};
use crate::state::AppState;

/// POST /api/chat
///
/// The body is decoded by hand so that any undecodable payload, whatever its
/// content type, is a 400 with the standard error body.
pub async fn handle_chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    let request: ChatRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!("Rejected chat body: {e}");
        AppError::InvalidJson
    })?;

    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let reply = state.chat.reply(&request.message).await?;

    Ok(Json(ChatResponse { reply }))
}

/// Any other method on /api/chat. OPTIONS never gets here; the CORS layer answers it.
pub async fn handle_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
