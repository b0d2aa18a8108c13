//! Owns the current system prompt and turns one user message into one reply.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::llm_client::{CompletionModel, GenerateContentResponse, LlmError};

/// Returned when the model answers with no candidates or an empty candidate.
pub const NO_RESPONSE_REPLY: &str = "No response generated.";
/// Returned when the first part is not text (e.g. a function call).
pub const NON_TEXT_REPLY: &str = "Received non-text response.";

pub struct ChatService {
    model: Arc<dyn CompletionModel>,
    system_prompt: RwLock<String>,
}

impl ChatService {
    pub fn new(model: Arc<dyn CompletionModel>, initial_prompt: String) -> Self {
        Self {
            model,
            system_prompt: RwLock::new(initial_prompt),
        }
    }

    /// A snapshot of the current prompt.
    pub async fn system_prompt(&self) -> String {
        self.system_prompt.read().await.clone()
    }

    /// Replaces the prompt wholesale. In-flight requests keep the snapshot they took.
    pub async fn set_system_prompt(&self, prompt: String) {
        *self.system_prompt.write().await = prompt;
    }

    pub async fn reply(&self, user_message: &str) -> Result<String, LlmError> {
        // Lock released before the outbound call.
        let prompt = self.system_prompt().await;
        let response = self.model.generate_content(&prompt, user_message).await?;
        Ok(extract_reply(&response))
    }
}

fn extract_reply(response: &GenerateContentResponse) -> String {
    match response.first_part() {
        None => NO_RESPONSE_REPLY.to_string(),
        Some(part) => match &part.text {
            Some(text) => text.clone(),
            None => NON_TEXT_REPLY.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::stub::{StubModel, StubReply};

    #[tokio::test]
    async fn test_reply_passes_prompt_and_message() {
        let model = Arc::new(StubModel::text("hi"));
        let service = ChatService::new(model.clone(), "be nice".to_string());

        let reply = service.reply("hello").await.unwrap();

        assert_eq!(reply, "hi");
        assert_eq!(
            model.calls(),
            vec![("be nice".to_string(), "hello".to_string())]
        );
    }

    #[tokio::test]
    async fn test_no_candidates_yields_placeholder() {
        let service = ChatService::new(
            Arc::new(StubModel::new(StubReply::NoCandidates)),
            String::new(),
        );
        assert_eq!(service.reply("hello").await.unwrap(), NO_RESPONSE_REPLY);
    }

    #[tokio::test]
    async fn test_non_text_part_yields_placeholder() {
        let service =
            ChatService::new(Arc::new(StubModel::new(StubReply::NonText)), String::new());
        assert_eq!(service.reply("hello").await.unwrap(), NON_TEXT_REPLY);
    }

    #[tokio::test]
    async fn test_model_error_propagates() {
        let service = ChatService::new(Arc::new(StubModel::new(StubReply::Fail)), String::new());
        assert!(service.reply("hello").await.is_err());
    }

    #[tokio::test]
    async fn test_set_system_prompt_applies_to_next_request() {
        let model = Arc::new(StubModel::text("ok"));
        let service = ChatService::new(model.clone(), "placeholder".to_string());

        service.set_system_prompt("full resume".to_string()).await;
        service.reply("hello").await.unwrap();

        assert_eq!(service.system_prompt().await, "full resume");
        assert_eq!(model.calls()[0].0, "full resume");
    }
}
