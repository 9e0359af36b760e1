//! Unit tests for data models.

use paper_search_assistant::models::*;

// =============================================================================
// Paper Deserialization Tests
// =============================================================================

#[test]
fn test_paper_minimal() {
    let json = r#"{"paperId": "abc123"}"#;
    let paper: Paper = serde_json::from_str(json).unwrap();

    assert_eq!(paper.paper_id.as_deref(), Some("abc123"));
    assert!(paper.title.is_none());
    assert!(paper.year.is_none());
    assert!(paper.authors.is_empty());
    assert_eq!(paper.citations(), 0);
}

#[test]
fn test_paper_with_all_record_fields() {
    let json = r#"{
        "paperId": "649def34f8be52c8b66281af98ae884c09aef38b",
        "title": "Attention is All you Need",
        "abstract": "The dominant sequence transduction models...",
        "year": 2017,
        "citationCount": 120000,
        "url": "https://www.semanticscholar.org/paper/649def34f8be52c8b66281af98ae884c09aef38b",
        "authors": [
            {"authorId": "40348417", "name": "Ashish Vaswani"},
            {"authorId": "1846258", "name": "Noam Shazeer"}
        ]
    }"#;
    let record = PaperRecord::from(serde_json::from_str::<Paper>(json).unwrap());

    assert_eq!(record.title, "Attention is All you Need");
    assert_eq!(record.year, Some(2017));
    assert_eq!(record.citation_count, 120_000);
    assert_eq!(record.author_names(), "Ashish Vaswani, Noam Shazeer");
}

#[test]
fn test_paper_ignores_unknown_fields() {
    let json = r#"{"paperId": "x", "venue": "NeurIPS", "tldr": {"text": "short"}}"#;
    assert!(serde_json::from_str::<Paper>(json).is_ok());
}

#[test]
fn test_search_result_empty_envelope() {
    let result: SearchResult = serde_json::from_str("{}").unwrap();
    assert_eq!(result.total, 0);
    assert!(result.data.is_empty());
}

// =============================================================================
// Input Tests
// =============================================================================

#[test]
fn test_input_defaults() {
    let input: SearchPapersInput = serde_json::from_str(r#"{"topic": "robotics"}"#).unwrap();

    assert_eq!(input.limit(), DEFAULT_LIMIT);
    assert!(input.operator().is_none());
    assert!(input.validate().is_ok());
}

#[test]
fn test_input_operator_leniency() {
    let input: SearchPapersInput =
        serde_json::from_str(r#"{"topic": "robotics", "year": 2020, "year_operator": " After "}"#).unwrap();
    assert_eq!(input.operator(), Some(YearOperator::After));

    let input: SearchPapersInput =
        serde_json::from_str(r#"{"topic": "robotics", "year": 2020, "year_operator": "exact"}"#).unwrap();
    assert_eq!(input.operator(), Some(YearOperator::In));
}

#[test]
fn test_year_operator_serde() {
    assert_eq!(serde_json::to_string(&YearOperator::Before).unwrap(), r#""before""#);
    assert_eq!(serde_json::from_str::<YearOperator>(r#""exact""#).unwrap(), YearOperator::In);
}

// =============================================================================
// Verdict Tests
// =============================================================================

#[test]
fn test_verdict_feedback_optional() {
    let json = r#"{"completeness":1,"quality":2,"robustness":3,"consistency":4,"specificity":5}"#;
    let outcome: EvaluationOutcome = serde_json::from_str(json).unwrap();

    let verdict = outcome.verdict().unwrap();
    assert_eq!(verdict.specificity, 5);
    assert!(verdict.feedback.is_empty());
}

#[test]
fn test_error_record_shape() {
    let outcome = EvaluationOutcome::Error(VerdictError {
        error: "Critic did not provide valid JSON content / empty after processing.".to_string(),
        details: None,
        original_string: None,
    });

    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"error": "Critic did not provide valid JSON content / empty after processing."})
    );
}
