//! Argument validators shared by the issue record and the builder.
//!
//! Both layers must fail identically for the same input, so the checks live
//! in one place: the builder calls them eagerly per call, the record calls
//! them again inside its canonical construction path.

use crate::error::{IssueError, IssueResult};

/// Requires a present, non-blank string.
///
/// Absent values fail as missing-argument; empty or whitespace-only values
/// fail as out-of-range. Both name `name` as the offending parameter.
pub fn require_non_blank(value: Option<&str>, name: &'static str) -> IssueResult<String> {
    match value {
        None => Err(IssueError::missing(name)),
        Some(s) if s.trim().is_empty() => Err(IssueError::out_of_range(
            name,
            "must not be empty or whitespace",
        )),
        Some(s) => Ok(s.to_string()),
    }
}

/// Requires a line number, when present, to be positive.
///
/// An absent line is valid (the issue applies to a whole file or has no
/// file). Negative lines are unrepresentable in the unsigned type.
pub fn require_positive_line(line: Option<u64>) -> IssueResult<Option<u64>> {
    match line {
        Some(0) => Err(IssueError::out_of_range(
            "line",
            "must be a positive line number",
        )),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::{require_non_blank, require_positive_line};
    use crate::error::IssueError;

    #[test]
    fn absent_value_is_missing_argument() {
        let err = require_non_blank(None, "message").expect_err("absent should fail");
        assert_eq!(err, IssueError::missing("message"));
    }

    #[test]
    fn blank_values_are_out_of_range() {
        for blank in ["", " ", "\t", " \u{a0} "] {
            let err = require_non_blank(Some(blank), "name").expect_err("blank should fail");
            assert!(matches!(err, IssueError::OutOfRange { name: "name", .. }));
        }
    }

    #[test]
    fn non_blank_value_passes_through() {
        let value = require_non_blank(Some("Warning"), "name").expect("non-blank");
        assert_eq!(value, "Warning");
    }

    #[test]
    fn line_zero_is_out_of_range() {
        let err = require_positive_line(Some(0)).expect_err("zero should fail");
        assert!(matches!(err, IssueError::OutOfRange { name: "line", .. }));
    }

    #[test]
    fn absent_and_positive_lines_are_valid() {
        assert_eq!(require_positive_line(None).expect("absent"), None);
        assert_eq!(require_positive_line(Some(1)).expect("one"), Some(1));
        assert_eq!(
            require_positive_line(Some(u64::MAX)).expect("max"),
            Some(u64::MAX)
        );
    }
}
