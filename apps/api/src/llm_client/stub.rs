//! In-process `CompletionModel` for handler and service tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{Candidate, CandidateContent, CompletionModel, GenerateContentResponse, LlmError, Part};

pub enum StubReply {
    Text(String),
    NoCandidates,
    NonText,
    Fail,
}

pub struct StubModel {
    reply: StubReply,
    calls: Mutex<Vec<(String, String)>>,
}

impl StubModel {
    pub fn new(reply: StubReply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn text(text: &str) -> Self {
        Self::new(StubReply::Text(text.to_string()))
    }

    /// Every `(system_instruction, user_message)` pair received so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

fn single_part(part: Part) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![Candidate {
            content: Some(CandidateContent { parts: vec![part] }),
            finish_reason: Some("STOP".to_string()),
        }],
        usage_metadata: None,
    }
}

#[async_trait]
impl CompletionModel for StubModel {
    async fn generate_content(
        &self,
        system_instruction: &str,
        user_message: &str,
    ) -> Result<GenerateContentResponse, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((system_instruction.to_string(), user_message.to_string()));

        match &self.reply {
            StubReply::Text(text) => Ok(single_part(Part {
                text: Some(text.clone()),
            })),
            StubReply::NoCandidates => Ok(GenerateContentResponse::default()),
            StubReply::NonText => Ok(single_part(Part { text: None })),
            StubReply::Fail => Err(LlmError::Api {
                status: 500,
                message: "upstream exploded: secret detail".to_string(),
            }),
        }
    }
}
