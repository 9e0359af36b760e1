//! Fuzzing library for paper-search-assistant.
//!
//! Targets cover the three places untrusted text is decoded: upstream paper
//! JSON, model-supplied search arguments and critic replies.
//!
//! # Usage
//!
//! ```bash
//! cd crates/sentinel-fuzz
//! cargo +nightly fuzz run fuzz_verdict_parse -- -max_total_time=60
//! ```

pub use paper_search_assistant::{evaluation, models, tools};
