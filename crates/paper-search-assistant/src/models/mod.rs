//! Data models for the Semantic Scholar API, capability inputs and critic verdicts.
//!
//! Upstream models use `#[serde(default)]` for optional fields and
//! `#[serde(rename_all = "camelCase")]` to match API naming.

mod enums;
mod inputs;
mod paper;
mod record;
mod verdict;

pub use enums::{ResponseFormat, YearOperator};
pub use inputs::{DEFAULT_LIMIT, SearchPapersInput};
pub use paper::{AuthorRef, Paper, SearchResult};
pub use record::{PLACEHOLDER, PaperRecord};
pub use verdict::{EvaluationOutcome, MAX_SCORE, MIN_SCORE, Verdict, VerdictError};
