//! The Search Agent: a chat model with the paper search capability attached.

use std::sync::Arc;

use crate::error::AgentResult;
use crate::llm::{ChatMessage, ChatModel, ChatRequest, ToolDefinition};

/// Instructions given to the Search Agent.
pub const SEARCH_AGENT_SYSTEM_MESSAGE: &str = "You are a helpful AI assistant that finds research papers. \
The user will ask you to find papers using a phrase like: \
'Find a research paper on [topic] that was published [in/before/after] [year] and has [number of citations] citations.' \
Extract the topic, year, year operator, and minimum citations from the user's request \
and use the 'search_papers' tool. \
If 'limit' is not specified by the user, default to 5 results. \
Present the found papers clearly, including title, authors, year, citations, and URL. \
After providing all information and a list of papers (if any are found), or stating that no papers were found, \
end your response with the word TERMINATE.";

/// Language-model driven agent that extracts search parameters, requests
/// capability calls and summarizes their results.
pub struct SearchAgent {
    model: Arc<dyn ChatModel>,
    system_message: String,
    tools: Vec<ToolDefinition>,
    history: Vec<ChatMessage>,
}

impl SearchAgent {
    /// Display name used in logs and transcripts.
    pub const NAME: &'static str = "Paper Search Agent";

    /// Create an agent with the default instructions.
    #[must_use]
    pub fn new(model: Arc<dyn ChatModel>, tools: Vec<ToolDefinition>) -> Self {
        Self::with_system_message(model, tools, SEARCH_AGENT_SYSTEM_MESSAGE)
    }

    /// Create an agent with custom instructions.
    #[must_use]
    pub fn with_system_message(
        model: Arc<dyn ChatModel>,
        tools: Vec<ToolDefinition>,
        system_message: impl Into<String>,
    ) -> Self {
        Self { model, system_message: system_message.into(), tools, history: Vec::new() }
    }

    /// Append an incoming message to the conversation state.
    pub fn receive(&mut self, message: ChatMessage) {
        self.history.push(message);
    }

    /// Ask the model for the next reply and record it.
    pub async fn generate_reply(&mut self) -> AgentResult<ChatMessage> {
        let mut messages = Vec::with_capacity(self.history.len() + 1);
        messages.push(ChatMessage::system(self.system_message.clone()));
        messages.extend(self.history.iter().cloned());

        let request = ChatRequest::new(messages).with_tools(self.tools.clone());
        let response = self.model.complete(request).await?;

        self.history.push(response.message.clone());
        Ok(response.message)
    }

    /// Conversation state since the last reset.
    #[must_use]
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Forget the conversation.
    pub fn reset(&mut self) {
        self.history.clear();
    }
}

impl std::fmt::Debug for SearchAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchAgent")
            .field("backend", &self.model.name())
            .field("model", &self.model.model())
            .field("tools", &self.tools.len())
            .field("history", &self.history.len())
            .finish()
    }
}
