//! Well-known priority levels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Priority level of an issue.
///
/// Each level maps to a fixed numeric value and display name. Providers that
/// need a scale outside these four levels set a numeric priority directly on
/// the builder instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssuePriority {
    Hint,
    Suggestion,
    Warning,
    Error,
}

impl IssuePriority {
    /// Numeric priority recorded on issues built from this level.
    pub fn value(self) -> i32 {
        match self {
            IssuePriority::Hint => 100,
            IssuePriority::Suggestion => 200,
            IssuePriority::Warning => 300,
            IssuePriority::Error => 400,
        }
    }

    /// Display name recorded on issues built from this level.
    pub fn name(self) -> &'static str {
        match self {
            IssuePriority::Hint => "Hint",
            IssuePriority::Suggestion => "Suggestion",
            IssuePriority::Warning => "Warning",
            IssuePriority::Error => "Error",
        }
    }
}

impl fmt::Display for IssuePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
