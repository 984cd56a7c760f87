//! Rule documentation links.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{IssueError, IssueResult};

/// Absolute URI pointing at documentation for a rule.
///
/// The input is stored verbatim and stringifies back to exactly the same
/// text. Only the absolute shape is enforced (an RFC 3986 scheme followed
/// by `:`); callers are expected to supply well-formed URIs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuleUrl(String);

impl RuleUrl {
    /// Parses an absolute URI, rejecting relative references.
    pub fn parse(input: &str) -> IssueResult<Self> {
        if !has_scheme(input) {
            return Err(IssueError::out_of_range(
                "uri",
                format!("`{input}` is not an absolute URI"),
            ));
        }
        Ok(RuleUrl(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn has_scheme(input: &str) -> bool {
    let Some((scheme, _)) = input.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

impl fmt::Display for RuleUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RuleUrl {
    type Err = IssueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleUrl::parse(s)
    }
}

impl TryFrom<String> for RuleUrl {
    type Error = IssueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RuleUrl::parse(&value)
    }
}

impl From<RuleUrl> for String {
    fn from(url: RuleUrl) -> Self {
        url.0
    }
}
