//! Markdown and plain-text output formatting.

use std::borrow::Cow;

use crate::evaluation::{EvaluationReport, EvaluationSummary};
use crate::models::{PLACEHOLDER, PaperRecord};

use super::json::outcome_json;

const ABSTRACT_PREVIEW_CHARS: usize = 300;

/// Format a list of paper records as Markdown.
#[must_use]
pub fn format_records_markdown(records: &[PaperRecord]) -> String {
    if records.is_empty() {
        return "No papers found.".to_string();
    }

    let mut output = format!("# Papers ({} results)\n\n", records.len());

    for (i, record) in records.iter().enumerate() {
        output.push_str(&format_record_markdown(record, i + 1));
        output.push_str("\n---\n\n");
    }

    output
}

/// Format a single paper record as Markdown.
#[must_use]
pub fn format_record_markdown(record: &PaperRecord, index: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!("## {}. {}\n\n", index, record.title));

    if !record.authors.is_empty() {
        output.push_str(&format!("**Authors**: {}\n\n", record.author_names()));
    }

    let year = record.year.map_or(Cow::Borrowed(PLACEHOLDER), |y| Cow::Owned(y.to_string()));
    output.push_str(&format!(
        "**Year**: {year} | **Citations**: {}\n\n",
        record.citation_count
    ));

    output.push_str(&format!("**URL**: {}\n\n", record.url));

    if record.r#abstract != PLACEHOLDER {
        output.push_str(&format!("**Abstract**: {}\n", truncate(&record.r#abstract)));
    }

    output
}

/// Plain-text block printed for each evaluated prompt.
///
/// # Errors
///
/// Returns error if the outcome cannot be serialized.
pub fn format_report_text(report: &EvaluationReport) -> serde_json::Result<String> {
    Ok(format!(
        "Prompt: {}\nAgent Response: {}\nCritic Evaluation: {}\n\n",
        report.prompt,
        report.agent_response,
        outcome_json(&report.evaluation)?
    ))
}

/// Format the run summary as Markdown.
#[must_use]
pub fn format_summary_markdown(summary: &EvaluationSummary) -> String {
    let mut output = String::from("# Evaluation Summary\n\n");

    output.push_str(&format!(
        "**Prompts**: {} | **Verdicts**: {} | **Errors**: {}\n\n",
        summary.prompts, summary.verdicts, summary.errors
    ));

    if summary.mean_scores.is_empty() {
        output.push_str("No usable verdicts.\n");
        return output;
    }

    output.push_str("| Criterion | Mean |\n|---|---|\n");
    for (criterion, mean) in &summary.mean_scores {
        output.push_str(&format!("| {criterion} | {mean:.2} |\n"));
    }

    output
}

fn truncate(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(ABSTRACT_PREVIEW_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}
