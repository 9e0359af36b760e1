//! Drives one task through the Search Agent ↔ Dispatcher exchange.

use std::sync::Arc;

use super::{DispatcherAgent, SearchAgent};
use crate::config::session;
use crate::error::AgentResult;
use crate::llm::{ChatMessage, ChatModel, Role};
use crate::tools::ToolRegistry;

/// Decides whether a Search Agent message ends the task.
#[derive(Clone)]
pub struct TerminationPredicate(Arc<dyn Fn(&str) -> bool + Send + Sync>);

impl TerminationPredicate {
    /// Wrap an arbitrary predicate over message text.
    pub fn new(predicate: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(predicate))
    }

    /// Terminate when the text contains `token`.
    #[must_use]
    pub fn sentinel(token: impl Into<String>) -> Self {
        let token = token.into();
        Self::new(move |text| text.contains(token.as_str()))
    }

    /// Evaluate the predicate.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        (self.0)(text)
    }
}

impl Default for TerminationPredicate {
    fn default() -> Self {
        Self::sentinel(session::TERMINATION_SENTINEL)
    }
}

impl std::fmt::Debug for TerminationPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TerminationPredicate")
    }
}

/// Why a task stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The Search Agent produced a terminating message.
    Sentinel,
    /// The requested number of exchanges was reached.
    MaxTurns,
    /// The dispatcher exhausted its auto-reply budget.
    AutoReplyLimit,
}

/// Messages exchanged while running one task.
#[derive(Debug, Clone)]
pub struct ChatTranscript {
    /// Every message in order, starting with the task.
    pub messages: Vec<ChatMessage>,
    /// Completed exchanges (Search Agent replies).
    pub turns: usize,
    /// Why the exchange stopped.
    pub reason: TerminationReason,
}

impl ChatTranscript {
    /// Text of the last non-empty Search Agent message.
    #[must_use]
    pub fn last_agent_message(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::Assistant && !m.content.trim().is_empty())
            .map(|m| m.content.as_str())
    }

    /// Number of capability calls the Search Agent requested.
    #[must_use]
    pub fn tool_call_count(&self) -> usize {
        self.messages.iter().map(|m| m.tool_calls.len()).sum()
    }
}

/// Per-session state: the two agents and the termination policy.
///
/// State is explicit and turn-scoped: call [`ChatSession::reset`] between tasks.
#[derive(Debug)]
pub struct ChatSession {
    agent: SearchAgent,
    dispatcher: DispatcherAgent,
    is_termination: TerminationPredicate,
    max_consecutive_auto_reply: usize,
}

impl ChatSession {
    /// Create a session with the default agents and policy.
    #[must_use]
    pub fn new(model: Arc<dyn ChatModel>, registry: Arc<ToolRegistry>) -> Self {
        let agent = SearchAgent::new(model, registry.definitions());
        let dispatcher = DispatcherAgent::new(registry);
        Self::from_agents(agent, dispatcher)
    }

    /// Create a session from preconfigured agents.
    #[must_use]
    pub fn from_agents(agent: SearchAgent, dispatcher: DispatcherAgent) -> Self {
        Self {
            agent,
            dispatcher,
            is_termination: TerminationPredicate::default(),
            max_consecutive_auto_reply: session::MAX_CONSECUTIVE_AUTO_REPLY,
        }
    }

    /// Replace the termination predicate.
    #[must_use]
    pub fn with_termination(mut self, predicate: TerminationPredicate) -> Self {
        self.is_termination = predicate;
        self
    }

    /// Bound the dispatcher's replies within one task.
    #[must_use]
    pub fn with_max_consecutive_auto_reply(mut self, limit: usize) -> Self {
        self.max_consecutive_auto_reply = limit;
        self
    }

    /// Run `task` until termination, `max_turns` exchanges, or the auto-reply cap.
    ///
    /// # Errors
    ///
    /// Returns an error if the chat model fails; capability failures are
    /// relayed to the model instead.
    pub async fn initiate_chat(
        &mut self,
        task: &str,
        max_turns: Option<usize>,
    ) -> AgentResult<ChatTranscript> {
        let opening = ChatMessage::user(task);
        self.agent.receive(opening.clone());
        let mut messages = vec![opening];

        let mut turns = 0;
        let mut auto_replies = 0;

        let reason = loop {
            if max_turns.is_some_and(|max| turns >= max) {
                break TerminationReason::MaxTurns;
            }

            let reply = self.agent.generate_reply().await?;
            turns += 1;
            messages.push(reply.clone());

            tracing::debug!(
                agent = SearchAgent::NAME,
                turn = turns,
                tool_calls = reply.tool_calls.len(),
                "Agent replied"
            );

            if self.is_termination.matches(&reply.content) {
                break TerminationReason::Sentinel;
            }
            if max_turns.is_some_and(|max| turns >= max) {
                break TerminationReason::MaxTurns;
            }
            if auto_replies >= self.max_consecutive_auto_reply {
                break TerminationReason::AutoReplyLimit;
            }

            for response in self.dispatcher.respond(&reply).await {
                self.agent.receive(response.clone());
                messages.push(response);
            }
            auto_replies += 1;
        };

        tracing::info!(turns, ?reason, "Chat finished");

        Ok(ChatTranscript { messages, turns, reason })
    }

    /// Clear both agents' conversational state.
    pub fn reset(&mut self) {
        self.agent.reset();
        self.dispatcher.reset();
    }

    /// The Search Agent.
    #[must_use]
    pub fn agent(&self) -> &SearchAgent {
        &self.agent
    }

    /// The Dispatcher Agent.
    #[must_use]
    pub fn dispatcher(&self) -> &DispatcherAgent {
        &self.dispatcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_predicate() {
        let predicate = TerminationPredicate::default();
        assert!(predicate.matches("Here are the papers.\n\nTERMINATE"));
        assert!(!predicate.matches("terminate"));
        assert!(!predicate.matches(""));
    }

    #[test]
    fn test_custom_predicate() {
        let predicate = TerminationPredicate::new(|text| text.ends_with("DONE"));
        assert!(predicate.matches("all DONE"));
        assert!(!predicate.matches("DONE already?"));
    }

    #[test]
    fn test_last_agent_message_skips_empty_and_tool_messages() {
        let transcript = ChatTranscript {
            messages: vec![
                ChatMessage::user("find papers"),
                ChatMessage::assistant("First answer"),
                ChatMessage::assistant(""),
                ChatMessage::tool("call_1", "[]"),
            ],
            turns: 2,
            reason: TerminationReason::MaxTurns,
        };
        assert_eq!(transcript.last_agent_message(), Some("First answer"));
    }

    #[test]
    fn test_last_agent_message_none() {
        let transcript = ChatTranscript {
            messages: vec![ChatMessage::user("hi")],
            turns: 0,
            reason: TerminationReason::MaxTurns,
        };
        assert_eq!(transcript.last_agent_message(), None);
    }
}
