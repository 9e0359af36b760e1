#![no_main]

use libfuzzer_sys::fuzz_target;
use paper_search_assistant::evaluation::{parse_verdict, strip_code_fence};
use paper_search_assistant::models::EvaluationOutcome;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    // Critic replies never panic; any verdict that comes back is in range
    let _ = strip_code_fence(&text);
    if let EvaluationOutcome::Verdict(verdict) = parse_verdict(&text) {
        assert!(verdict.out_of_range().is_none());
    }
});
