//! Error types for issue validation.
//!
//! Exactly two kinds of failure exist: a required argument that was never
//! provided, and an argument that was provided but rejected. Both carry the
//! name of the offending parameter so a provider author can correct the call
//! site directly.

use thiserror::Error;

/// Validation failure raised while building or constructing an issue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IssueError {
    /// A required argument was not provided.
    #[error("missing required argument `{name}`")]
    MissingArgument {
        /// Parameter that was required but absent.
        name: &'static str,
    },

    /// An argument was provided but is outside the acceptable range.
    /// Covers blank strings, non-positive line numbers and invalid or
    /// absolute file paths.
    #[error("argument `{name}` is out of range: {reason}")]
    OutOfRange {
        /// Parameter that was rejected.
        name: &'static str,
        /// Which rule the value violated.
        reason: String,
    },
}

impl IssueError {
    pub fn missing(name: &'static str) -> Self {
        IssueError::MissingArgument { name }
    }

    pub fn out_of_range(name: &'static str, reason: impl Into<String>) -> Self {
        IssueError::OutOfRange {
            name,
            reason: reason.into(),
        }
    }

    /// Name of the parameter that caused the failure.
    pub fn argument(&self) -> &'static str {
        match self {
            IssueError::MissingArgument { name } => name,
            IssueError::OutOfRange { name, .. } => name,
        }
    }
}

/// Result type alias using IssueError.
pub type IssueResult<T> = Result<T, IssueError>;
