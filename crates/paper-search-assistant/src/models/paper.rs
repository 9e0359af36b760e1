//! Paper data model matching the Semantic Scholar search schema.

use serde::{Deserialize, Serialize};

/// A research paper as returned by the Semantic Scholar search endpoint.
///
/// Every field is optional: the API omits or nulls fields freely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Unique Semantic Scholar paper ID.
    #[serde(default)]
    pub paper_id: Option<String>,

    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Paper abstract.
    #[serde(default)]
    pub r#abstract: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Number of citations this paper has received.
    #[serde(default)]
    pub citation_count: Option<i64>,

    /// Semantic Scholar landing page.
    #[serde(default)]
    pub url: Option<String>,

    /// List of authors.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub authors: Vec<AuthorRef>,
}

impl Paper {
    /// Get citation count or 0 if not available.
    #[must_use]
    pub fn citations(&self) -> i64 {
        self.citation_count.unwrap_or(0)
    }
}

/// Author reference embedded in a paper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    /// Author ID.
    #[serde(default)]
    pub author_id: Option<String>,

    /// Author display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Search result wrapper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    /// Total number of matching papers.
    #[serde(default)]
    pub total: i64,

    /// Current offset in the result set.
    #[serde(default)]
    pub offset: i32,

    /// Offset of the next page, if any.
    #[serde(default)]
    pub next: Option<i32>,

    /// List of papers in this page.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<Paper>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
