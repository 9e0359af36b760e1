#![no_main]

use libfuzzer_sys::fuzz_target;
use paper_search_assistant::models::{PaperRecord, SearchResult};

fuzz_target!(|data: &[u8]| {
    // Upstream envelopes must either fail to parse or reshape without panicking
    if let Ok(result) = serde_json::from_slice::<SearchResult>(data) {
        let records: Vec<PaperRecord> = result.data.iter().map(PaperRecord::from).collect();
        let _ = serde_json::to_string(&records);
    }
});
