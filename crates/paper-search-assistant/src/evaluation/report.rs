//! Evaluation reports and their aggregate summary.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::EvaluationOutcome;

/// Outcome of evaluating one prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub prompt: String,
    pub agent_response: String,
    pub evaluation: EvaluationOutcome,
    pub evaluated_at: DateTime<Utc>,
}

/// Aggregate over a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    /// Prompts evaluated.
    pub prompts: usize,
    /// Prompts with a usable verdict.
    pub verdicts: usize,
    /// Prompts whose critic output was replaced by an error record.
    pub errors: usize,
    /// Mean score per criterion over usable verdicts.
    pub mean_scores: BTreeMap<String, f64>,
}

impl EvaluationSummary {
    #[must_use]
    pub fn from_reports(reports: &[EvaluationReport]) -> Self {
        let verdicts: Vec<_> = reports.iter().filter_map(|r| r.evaluation.verdict()).collect();

        let mut totals: BTreeMap<String, i64> = BTreeMap::new();
        for verdict in &verdicts {
            for (criterion, score) in verdict.scores() {
                *totals.entry(criterion.to_string()).or_default() += score;
            }
        }

        let mean_scores = totals
            .into_iter()
            .map(|(criterion, total)| (criterion, total as f64 / verdicts.len() as f64))
            .collect();

        Self {
            prompts: reports.len(),
            verdicts: verdicts.len(),
            errors: reports.len() - verdicts.len(),
            mean_scores,
        }
    }
}

/// Everything produced by one harness run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRun {
    pub summary: EvaluationSummary,
    pub reports: Vec<EvaluationReport>,
}

impl EvaluationRun {
    #[must_use]
    pub fn new(reports: Vec<EvaluationReport>) -> Self {
        Self { summary: EvaluationSummary::from_reports(&reports), reports }
    }

    /// Write the run as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or the write fails.
    pub fn write_json(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        tracing::info!(path = %path.display(), "Wrote evaluation report");
        Ok(())
    }
}
