//! The Dispatcher Agent: executes capability calls requested by the Search Agent.
//!
//! It holds no model, never starts a conversation and never asks a human for
//! input. Failures are relayed to the model as `{"error": ...}` payloads so the
//! Search Agent can tell the user what went wrong.

use std::sync::Arc;

use serde_json::json;

use crate::llm::{ChatMessage, ToolCall};
use crate::tools::ToolRegistry;

/// Reply sent when the Search Agent's message carries no tool calls.
pub const DEFAULT_AUTO_REPLY: &str = "";

/// Non-interactive executor of capability calls.
pub struct DispatcherAgent {
    registry: Arc<ToolRegistry>,
    auto_reply: String,
    history: Vec<ChatMessage>,
}

impl DispatcherAgent {
    /// Display name used in logs and transcripts.
    pub const NAME: &'static str = "User";

    #[must_use]
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry, auto_reply: DEFAULT_AUTO_REPLY.to_string(), history: Vec::new() }
    }

    /// Replace the reply used when there is nothing to execute.
    #[must_use]
    pub fn with_auto_reply(mut self, auto_reply: impl Into<String>) -> Self {
        self.auto_reply = auto_reply.into();
        self
    }

    /// Respond to one Search Agent message.
    ///
    /// Returns one tool message per requested call, in request order, or the
    /// auto-reply when no call was requested.
    pub async fn respond(&mut self, message: &ChatMessage) -> Vec<ChatMessage> {
        self.history.push(message.clone());

        let replies = if message.has_tool_calls() {
            let mut replies = Vec::with_capacity(message.tool_calls.len());
            for call in &message.tool_calls {
                let content = self.execute(call).await;
                replies.push(ChatMessage::tool(call.id.clone(), content));
            }
            replies
        } else {
            vec![ChatMessage::user(self.auto_reply.clone())]
        };

        self.history.extend(replies.iter().cloned());
        replies
    }

    async fn execute(&self, call: &ToolCall) -> String {
        let arguments = if call.arguments.trim().is_empty() {
            json!({})
        } else {
            match serde_json::from_str::<serde_json::Value>(&call.arguments) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(tool = %call.name, error = %e, "Tool arguments are not valid JSON");
                    return error_payload(&format!("Invalid JSON arguments: {e}"));
                }
            }
        };

        tracing::info!(tool = %call.name, call_id = %call.id, "Executing tool");

        match self.registry.call(&call.name, arguments).await {
            Ok(result) => result.to_string(),
            Err(e) => {
                tracing::error!(tool = %call.name, error = %e, "Tool execution failed");
                error_payload(&e.to_user_message())
            }
        }
    }

    /// Messages seen and sent since the last reset.
    #[must_use]
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Forget the conversation.
    pub fn reset(&mut self) {
        self.history.clear();
    }
}

impl std::fmt::Debug for DispatcherAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatcherAgent")
            .field("registry", &self.registry)
            .field("history", &self.history.len())
            .finish()
    }
}

fn error_payload(message: &str) -> String {
    json!({ "error": message }).to_string()
}
