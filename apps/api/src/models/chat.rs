use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Successful chat reply. Failures use the `{"error": ...}` body built by `AppError`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}
