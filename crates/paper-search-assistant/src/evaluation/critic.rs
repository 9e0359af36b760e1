//! The critic: a separate chat model that rates Search Agent responses.

use std::sync::Arc;

use super::prompts::{CRITIC_SYSTEM_MESSAGE, critic_prompt};
use crate::error::LlmResult;
use crate::llm::{ChatMessage, ChatModel, ChatRequest};

/// Model-backed evaluator of agent responses.
pub struct CriticAgent {
    model: Arc<dyn ChatModel>,
    system_message: String,
}

impl CriticAgent {
    #[must_use]
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model, system_message: CRITIC_SYSTEM_MESSAGE.to_string() }
    }

    /// Ask the critic to rate `agent_response` to `prompt`; returns its raw text.
    ///
    /// Each call is stateless.
    pub async fn evaluate(&self, prompt: &str, agent_response: &str) -> LlmResult<String> {
        let request = ChatRequest::new(vec![
            ChatMessage::system(self.system_message.clone()),
            ChatMessage::user(critic_prompt(prompt, agent_response)),
        ]);

        let response = self.model.complete(request).await?;
        Ok(response.message.content)
    }
}

impl std::fmt::Debug for CriticAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CriticAgent").field("model", &self.model.model()).finish()
    }
}
