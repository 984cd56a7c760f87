#![no_main]

//! Fuzz target for file path normalization.
//!
//! Normalization must never panic, and anything it accepts must be
//! canonical: relative, forward slashes only, stable under a second pass.

use libfuzzer_sys::fuzz_target;

use lintel_types::path::normalize_file_path;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(Some(normalized)) = normalize_file_path(s) {
        let text = normalized.as_str();
        assert!(!text.contains('\\'));
        assert!(!text.starts_with('/'));
        assert!(!text.ends_with('/'));

        let again = normalize_file_path(text)
            .expect("normalized output stays valid")
            .expect("normalized output stays a file");
        assert_eq!(normalized, again);
    }
});
