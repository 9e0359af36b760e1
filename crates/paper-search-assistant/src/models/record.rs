//! Fixed-field paper record handed to the agent and printed to the operator.

use serde::{Deserialize, Serialize};

use super::Paper;

/// Placeholder used for any text field missing upstream.
pub const PLACEHOLDER: &str = "N/A";

/// A paper reshaped into the fixed record the agent summarizes.
///
/// Missing upstream text becomes [`PLACEHOLDER`], a missing citation count
/// becomes 0 and a missing year stays `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    pub title: String,
    pub year: Option<i32>,
    pub authors: Vec<String>,
    pub r#abstract: String,
    pub url: String,
    #[serde(rename = "citationCount")]
    pub citation_count: i64,
    #[serde(rename = "paperId")]
    pub paper_id: String,
}

impl PaperRecord {
    /// Author names joined for display.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors.join(", ")
    }
}

impl From<&Paper> for PaperRecord {
    fn from(paper: &Paper) -> Self {
        Self {
            title: text_or_placeholder(paper.title.as_deref()),
            year: paper.year,
            authors: paper
                .authors
                .iter()
                .map(|a| text_or_placeholder(a.name.as_deref()))
                .collect(),
            r#abstract: text_or_placeholder(paper.r#abstract.as_deref()),
            url: text_or_placeholder(paper.url.as_deref()),
            citation_count: paper.citations(),
            paper_id: text_or_placeholder(paper.paper_id.as_deref()),
        }
    }
}

impl From<Paper> for PaperRecord {
    fn from(paper: Paper) -> Self {
        Self::from(&paper)
    }
}

fn text_or_placeholder(value: Option<&str>) -> String {
    value.unwrap_or(PLACEHOLDER).to_string()
}
