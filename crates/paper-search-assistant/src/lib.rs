//! Paper Search Assistant
//!
//! A conversational research-paper finder over the Semantic Scholar Graph API.
//! A chat model (the Search Agent) turns free-text requests into structured
//! `search_papers` calls; a dispatcher executes them and relays the results.
//! An evaluation harness scores the agent with a second, critic model.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use paper_search_assistant::{
//!     agent::ChatSession, client::SemanticScholarClient, config::Config, llm::OpenAiChatModel,
//!     tools::{ToolContext, ToolRegistry},
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = Arc::new(SemanticScholarClient::new(&config)?);
//!     let registry = Arc::new(ToolRegistry::with_all_tools(ToolContext::new(client)));
//!     let model = Arc::new(OpenAiChatModel::new(&config.llm)?);
//!
//!     let mut session = ChatSession::new(model, registry);
//!     let transcript = session.initiate_chat("papers on diffusion models after 2021", None).await?;
//!     println!("{}", transcript.last_agent_message().unwrap_or_default());
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod client;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod formatters;
pub mod llm;
pub mod models;
pub mod repl;
pub mod tools;

pub use client::SemanticScholarClient;
pub use config::Config;
pub use error::{AgentError, ClientError, LlmError, ToolError};
