//! Input models for capability parameters.

use serde::{Deserialize, Serialize};

use super::YearOperator;
use crate::error::{ToolError, ToolResult};

/// Result limit applied when the caller does not specify one.
pub const DEFAULT_LIMIT: u32 = 5;

/// Arguments of the `search_papers` capability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPapersInput {
    /// Research topic to search for.
    pub topic: String,

    /// Target publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Year comparison mode as sent by the caller.
    ///
    /// Kept as text so an unrecognized operator degrades to an exact-year
    /// match instead of rejecting the whole call.
    #[serde(default)]
    pub year_operator: Option<String>,

    /// Minimum citation count.
    #[serde(default)]
    pub min_citations: Option<i32>,

    /// Maximum number of records to return.
    #[serde(default)]
    pub limit: Option<u32>,
}

impl SearchPapersInput {
    /// Create an input for a topic with every other parameter unset.
    #[must_use]
    pub fn new(topic: impl Into<String>) -> Self {
        Self { topic: topic.into(), ..Default::default() }
    }

    /// Set the year and its comparison mode.
    #[must_use]
    pub fn with_year(mut self, year: i32, operator: Option<YearOperator>) -> Self {
        self.year = Some(year);
        self.year_operator = operator.map(|op| op.as_str().to_string());
        self
    }

    /// Set the minimum citation count.
    #[must_use]
    pub fn with_min_citations(mut self, min_citations: i32) -> Self {
        self.min_citations = Some(min_citations);
        self
    }

    /// Set the result limit.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Parsed year operator, `None` when absent or unrecognized.
    #[must_use]
    pub fn operator(&self) -> Option<YearOperator> {
        self.year_operator.as_deref().and_then(YearOperator::parse)
    }

    /// Effective result limit.
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// Check the invariants the search relies on.
    pub fn validate(&self) -> ToolResult<()> {
        if self.topic.trim().is_empty() {
            return Err(ToolError::validation("topic", "cannot be empty"));
        }
        Ok(())
    }
}
