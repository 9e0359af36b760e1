//! Output formatters for paper records and evaluation reports.

mod json;
mod markdown;

pub use json::{outcome_json, records_json};
pub use markdown::{
    format_record_markdown, format_records_markdown, format_report_text, format_summary_markdown,
};
