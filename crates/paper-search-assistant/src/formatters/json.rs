//! JSON output formatting.

use crate::models::{EvaluationOutcome, PaperRecord};

/// Pretty-printed record list, as shown by `search --format json`.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn records_json(records: &[PaperRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

/// Pretty-printed critic outcome.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn outcome_json(outcome: &EvaluationOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcome)
}
