//! Paper search: turns a topic plus year/citation constraints into a bounded
//! list of paper records.

use serde_json::json;

use super::{Tool, ToolContext};
use crate::client::SemanticScholarClient;
use crate::config::fields;
use crate::error::{ClientResult, ToolResult};
use crate::models::{DEFAULT_LIMIT, PaperRecord, SearchPapersInput, SearchResult, YearOperator};

/// Build the Semantic Scholar year filter.
///
/// - exact → `"2020"`
/// - before → `"-2019"` (open start, ends the year before)
/// - after → `"2021-"` (open end, starts the year after)
/// - no operator → exact year
///
/// Returns `None` when no year is given; the operator alone has no effect.
#[must_use]
pub fn year_filter(year: Option<i32>, operator: Option<YearOperator>) -> Option<String> {
    let year = year?;
    Some(match operator {
        Some(YearOperator::Before) => format!("-{}", year.saturating_sub(1)),
        Some(YearOperator::After) => format!("{}-", year.saturating_add(1)),
        Some(YearOperator::In) | None => year.to_string(),
    })
}

/// Map an upstream page to records, keeping relevance order and at most
/// `limit` entries.
#[must_use]
pub fn shape_records(result: &SearchResult, limit: u32) -> Vec<PaperRecord> {
    result.data.iter().take(limit as usize).map(PaperRecord::from).collect()
}

/// Run one search and shape the results.
///
/// Records keep upstream relevance order and never exceed `input.limit()`.
/// A limit of zero returns an empty list without calling the API.
///
/// # Errors
///
/// Upstream failures are returned unchanged; nothing is retried.
pub async fn search_papers(
    client: &SemanticScholarClient,
    input: &SearchPapersInput,
) -> ClientResult<Vec<PaperRecord>> {
    let limit = input.limit();
    if limit == 0 {
        return Ok(Vec::new());
    }

    let year = year_filter(input.year, input.operator());

    if input.year.is_some() && input.year_operator.is_some() && input.operator().is_none() {
        tracing::warn!(
            operator = input.year_operator.as_deref(),
            "Unrecognized year operator, matching the exact year"
        );
    }

    tracing::info!(
        topic = %input.topic,
        year = year.as_deref(),
        min_citations = input.min_citations,
        limit,
        "Searching papers"
    );

    let result = client
        .search_papers(&input.topic, year.as_deref(), input.min_citations, limit, fields::RECORD)
        .await?;

    let records = shape_records(&result, limit);

    tracing::info!(returned = result.data.len(), kept = records.len(), "Search complete");

    Ok(records)
}

/// The `search_papers` capability.
pub struct SearchPapersTool;

#[async_trait::async_trait]
impl Tool for SearchPapersTool {
    fn name(&self) -> &'static str {
        "search_papers"
    }

    fn description(&self) -> &'static str {
        "Searches for research papers based on topic, publication year (and operator: \
         'in', 'before', 'after'), and minimum citations."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "The research topic to search for."
                },
                "year": {
                    "type": "integer",
                    "description": "The target year for publication (e.g., 2020)."
                },
                "year_operator": {
                    "type": "string",
                    "description": "How to compare the publication year: 'in' (exact year), \
                                    'before' (e.g., year < 2020), 'after' (e.g., year > 2020).",
                    "enum": ["in", "before", "after"]
                },
                "min_citations": {
                    "type": "integer",
                    "description": "The minimum number of citations a paper should have."
                },
                "limit": {
                    "type": "integer",
                    "description": "Maximum number of papers to return, defaults to 5 if not specified.",
                    "default": DEFAULT_LIMIT
                }
            },
            "required": ["topic"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<serde_json::Value> {
        let params: SearchPapersInput = serde_json::from_value(input)?;
        params.validate()?;

        let records = search_papers(&ctx.client, &params).await?;
        Ok(serde_json::to_value(records)?)
    }
}
