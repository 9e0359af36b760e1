#![no_main]

use libfuzzer_sys::fuzz_target;
use paper_search_assistant::models::SearchPapersInput;
use paper_search_assistant::tools::year_filter;

fuzz_target!(|data: &[u8]| {
    // Model-supplied arguments: parse, validate, build the year filter
    if let Ok(input) = serde_json::from_slice::<SearchPapersInput>(data) {
        let _ = input.validate();
        let _ = year_filter(input.year, input.operator());
        let _ = input.limit();
    }
});
