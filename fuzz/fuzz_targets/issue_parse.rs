#![no_main]

//! Fuzz target for issue JSON parsing.
//!
//! Feeds arbitrary JSON bytes through `RawIssue` deserialization and the
//! validated `Issue` conversion to ensure malformed input never panics.

use libfuzzer_sys::fuzz_target;

use lintel_types::issue::{Issue, RawIssue};
use lintel_types::rule::RuleUrl;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    // Tolerant parse of the raw parts, then validated construction.
    if let Ok(raw) = serde_json::from_str::<RawIssue>(s) {
        if let Ok(issue) = Issue::try_from(raw) {
            let _ = serde_json::to_string(&issue);
            let _ = serde_json::to_string_pretty(&issue);
        }
    }

    // Direct deserialization goes through the same validation path.
    if let Ok(issue) = serde_json::from_str::<Issue>(s) {
        let _ = serde_json::to_string(&issue);
    }

    let _ = serde_json::from_str::<RuleUrl>(s);
});
