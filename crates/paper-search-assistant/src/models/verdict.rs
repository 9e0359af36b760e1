//! Critic verdict models.

use serde::{Deserialize, Serialize};

/// Lowest score on the rubric scale.
pub const MIN_SCORE: i64 = 1;

/// Highest score on the rubric scale.
pub const MAX_SCORE: i64 = 5;

/// The critic's rating of one agent response.
///
/// Scores are plain integers; values off the 1-5 scale are caught by
/// [`Verdict::out_of_range`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Did the agent address every aspect of the prompt.
    pub completeness: i64,
    /// Accuracy, clarity and organization.
    pub quality: i64,
    /// Handling of ambiguous or impossible requests.
    pub robustness: i64,
    /// Agreement of results with every stated constraint.
    pub consistency: i64,
    /// Precision of per-paper details.
    pub specificity: i64,
    /// Free-text explanation of the ratings.
    #[serde(default)]
    pub feedback: String,
}

impl Verdict {
    /// Rubric criteria in report order, paired with their scores.
    #[must_use]
    pub fn scores(&self) -> [(&'static str, i64); 5] {
        [
            ("completeness", self.completeness),
            ("quality", self.quality),
            ("robustness", self.robustness),
            ("consistency", self.consistency),
            ("specificity", self.specificity),
        ]
    }

    /// First criterion whose score falls outside the rubric scale.
    #[must_use]
    pub fn out_of_range(&self) -> Option<(&'static str, i64)> {
        self.scores().into_iter().find(|(_, score)| !(MIN_SCORE..=MAX_SCORE).contains(score))
    }
}

/// Structured record substituted when the critic output cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictError {
    /// Short error marker.
    pub error: String,

    /// Parser diagnostic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Text that failed to parse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_string: Option<String>,
}

/// Result of interpreting one critic reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvaluationOutcome {
    /// The critic produced a usable verdict.
    Verdict(Verdict),
    /// The critic output was empty or malformed.
    Error(VerdictError),
}

impl EvaluationOutcome {
    /// The verdict, if parsing succeeded.
    #[must_use]
    pub const fn verdict(&self) -> Option<&Verdict> {
        match self {
            Self::Verdict(v) => Some(v),
            Self::Error(_) => None,
        }
    }

    /// Whether this outcome is an error record.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
