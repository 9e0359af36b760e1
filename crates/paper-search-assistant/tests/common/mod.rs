//! Shared fixtures: a scripted chat model and mock-server helpers.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use wiremock::MockServer;

use paper_search_assistant::client::SemanticScholarClient;
use paper_search_assistant::config::Config;
use paper_search_assistant::error::{LlmError, LlmResult};
use paper_search_assistant::llm::{
    ChatMessage, ChatModel, ChatRequest, ChatResponse, TokenUsage, ToolCall,
};
use paper_search_assistant::tools::{ToolContext, ToolRegistry};

/// A chat model that replays canned replies and records every request.
///
/// Once the script runs out, further calls fail with `EmptyResponse`.
#[derive(Default)]
pub struct ScriptedModel {
    replies: Mutex<VecDeque<LlmResult<ChatMessage>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: &str) -> Self {
        self.push(Ok(ChatMessage::assistant(text)))
    }

    pub fn tool_call(self, id: &str, name: &str, arguments: serde_json::Value) -> Self {
        let call = ToolCall::new(id, name, arguments.to_string());
        self.push(Ok(ChatMessage::assistant_tool_calls("", vec![call])))
    }

    pub fn fail(self, status: u16, message: &str) -> Self {
        self.push(Err(LlmError::api(status, message)))
    }

    fn push(self, reply: LlmResult<ChatMessage>) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, request: ChatRequest) -> LlmResult<ChatResponse> {
        self.requests.lock().unwrap().push(request);
        let message = self.replies.lock().unwrap().pop_front().unwrap_or(Err(LlmError::EmptyResponse))?;
        Ok(ChatResponse {
            message,
            finish_reason: Some("stop".to_string()),
            usage: TokenUsage::default(),
        })
    }
}

/// Registry with every capability, pointed at the mock server.
pub fn setup_registry(mock_server: &MockServer) -> Arc<ToolRegistry> {
    let config = Config::for_testing(&mock_server.uri());
    let client = SemanticScholarClient::new(&config).unwrap();
    Arc::new(ToolRegistry::with_all_tools(ToolContext::new(Arc::new(client))))
}

/// Client pointed at the mock server.
pub fn setup_client(mock_server: &MockServer) -> SemanticScholarClient {
    SemanticScholarClient::new(&Config::for_testing(&mock_server.uri())).unwrap()
}

/// Upstream paper JSON with every record field present.
pub fn sample_paper_json(id: &str, title: &str, year: i32, citations: i64) -> serde_json::Value {
    json!({
        "paperId": id,
        "title": title,
        "abstract": format!("Abstract for {title}"),
        "year": year,
        "citationCount": citations,
        "url": format!("https://www.semanticscholar.org/paper/{id}"),
        "authors": [{"authorId": "1", "name": "Test Author"}]
    })
}

/// Upstream search envelope.
pub fn sample_search_result(papers: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "total": papers.len(),
        "offset": 0,
        "data": papers
    })
}
