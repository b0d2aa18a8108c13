use std::sync::Arc;

use crate::chat::service::ChatService;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Holds the system prompt and the completion model.
    pub chat: Arc<ChatService>,
    pub config: Config,
}
