//! Chat-model backends.
//!
//! Agents talk to a [`ChatModel`]; [`OpenAiChatModel`] implements it against
//! any OpenAI-compatible `/chat/completions` endpoint.

mod message;
mod openai;

pub use message::{
    ChatMessage, ChatRequest, ChatResponse, Role, TokenUsage, ToolCall, ToolDefinition,
};
pub use openai::OpenAiChatModel;

use async_trait::async_trait;

use crate::error::LlmResult;

/// A language-model backend.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Model identifier sent with each request.
    fn model(&self) -> &str;

    /// Run one completion.
    async fn complete(&self, request: ChatRequest) -> LlmResult<ChatResponse>;
}
