//! Conversational agents.
//!
//! - [`SearchAgent`]: model-driven, extracts parameters and summarizes results
//! - [`DispatcherAgent`]: executes capability calls, no model
//! - [`ChatSession`]: runs one task between the two and owns their state

mod conversation;
mod dispatcher;
mod search;

pub use conversation::{ChatSession, ChatTranscript, TerminationPredicate, TerminationReason};
pub use dispatcher::{DEFAULT_AUTO_REPLY, DispatcherAgent};
pub use search::{SEARCH_AGENT_SYSTEM_MESSAGE, SearchAgent};
