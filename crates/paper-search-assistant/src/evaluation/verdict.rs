//! Interpreting the critic's free-text reply.

use crate::models::{EvaluationOutcome, MAX_SCORE, MIN_SCORE, Verdict, VerdictError};

/// Error marker for an empty critic reply.
pub const EMPTY_CRITIC_ERROR: &str =
    "Critic did not provide valid JSON content / empty after processing.";

/// Error marker for a reply that is not a valid verdict object.
pub const DECODE_ERROR: &str = "JSONDecodeError";

/// Error marker for scores outside the rubric scale.
pub const SCORE_RANGE_ERROR: &str = "ScoreOutOfRange";

/// Remove an optional surrounding code fence.
///
/// Handles ```` ```json ```` (any case) and bare ```` ``` ```` openers; the
/// closing fence is optional. Surrounding whitespace is trimmed.
#[must_use]
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let rest = match rest.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
        _ => rest,
    };
    let rest = rest.strip_suffix("```").unwrap_or(rest);

    rest.trim()
}

/// Parse the critic reply into a verdict or a substitute error record.
///
/// Never fails: empty, malformed or out-of-range replies become
/// [`VerdictError`] records and a diagnostic is logged.
#[must_use]
pub fn parse_verdict(text: &str) -> EvaluationOutcome {
    let json = strip_code_fence(text);

    if json.is_empty() {
        tracing::error!("Critic reply is empty after removing the code fence");
        return EvaluationOutcome::Error(VerdictError {
            error: EMPTY_CRITIC_ERROR.to_string(),
            details: None,
            original_string: None,
        });
    }

    let verdict: Verdict = match serde_json::from_str(json) {
        Ok(v) => v,
        Err(e) => {
            tracing::error!(error = %e, offending = json, "Failed to parse JSON from critic");
            return EvaluationOutcome::Error(VerdictError {
                error: DECODE_ERROR.to_string(),
                details: Some(e.to_string()),
                original_string: Some(json.to_string()),
            });
        }
    };

    if let Some((criterion, score)) = verdict.out_of_range() {
        tracing::error!(criterion, score, "Critic score outside the rubric scale");
        return EvaluationOutcome::Error(VerdictError {
            error: SCORE_RANGE_ERROR.to_string(),
            details: Some(format!("{criterion}={score} is outside {MIN_SCORE}-{MAX_SCORE}")),
            original_string: Some(json.to_string()),
        });
    }

    EvaluationOutcome::Verdict(verdict)
}
