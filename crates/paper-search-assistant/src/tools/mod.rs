//! Capabilities the Search Agent can call.
//!
//! Each capability:
//! 1. Advertises a name, description and JSON parameter schema
//! 2. Parses and validates its arguments
//! 3. Calls the Semantic Scholar client and returns JSON for the model

mod search;

pub use search::{SearchPapersTool, search_papers, shape_records, year_filter};

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::client::SemanticScholarClient;
use crate::error::{ToolError, ToolResult};
use crate::llm::ToolDefinition;

/// Tool execution context.
pub struct ToolContext {
    /// API client.
    pub client: Arc<SemanticScholarClient>,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub fn new(client: Arc<SemanticScholarClient>) -> Self {
        Self { client }
    }
}

/// A callable capability.
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (e.g., "search_papers").
    fn name(&self) -> &'static str;

    /// Tool description for the model.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with given input.
    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value)
    -> ToolResult<serde_json::Value>;

    /// Definition advertised to the model.
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.input_schema(),
        }
    }
}

/// Name → capability mapping with a shared execution context.
pub struct ToolRegistry {
    ctx: ToolContext,
    tools: BTreeMap<&'static str, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx, tools: BTreeMap::new() }
    }

    /// Create a registry with every capability registered.
    #[must_use]
    pub fn with_all_tools(ctx: ToolContext) -> Self {
        let mut registry = Self::new(ctx);
        for tool in register_all_tools() {
            registry.register(tool);
        }
        registry
    }

    /// Register a capability, replacing any previous one with the same name.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        tracing::debug!(tool = tool.name(), "Registering tool");
        self.tools.insert(tool.name(), tool);
    }

    /// Get tool by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    /// Definitions of every registered capability, ordered by name.
    #[must_use]
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|t| t.definition()).collect()
    }

    /// Number of registered capabilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Invoke a capability by name.
    pub async fn call(&self, name: &str, input: serde_json::Value) -> ToolResult<serde_json::Value> {
        let tool = self.get(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        tool.execute(&self.ctx, input).await
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry").field("tools", &self.tools.keys()).finish()
    }
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn Tool>> {
    vec![Box::new(SearchPapersTool)]
}
