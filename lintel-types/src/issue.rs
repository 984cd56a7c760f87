//! The immutable issue record.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::IssueError;
use crate::path;
use crate::rule::RuleUrl;
use crate::validate;

/// One finding reported by an analysis tool.
///
/// An `Issue` is a fully validated, normalized snapshot: it is created once,
/// through the canonical validation path, and exposes read accessors only.
/// Construct it from a [`RawIssue`] (directly or through the provider SDK's
/// builder); there is no way to obtain an `Issue` that violates the
/// invariants, including via deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawIssue")]
pub struct Issue {
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    file_path: Option<Utf8PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<u64>,

    message: String,

    priority: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    priority_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    rule_url: Option<RuleUrl>,

    provider_type: String,
}

/// Unvalidated issue fields, as extracted by a provider.
///
/// This is the single funnel into [`Issue`]: every construction shape goes
/// through `Issue::try_from`, so behavior is identical no matter which
/// fields a caller chooses to fill in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawIssue {
    /// Name of the logical project the affected file belongs to.
    /// Stored verbatim, without normalization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Path of the affected file, as reported by the tool. Normalized on
    /// construction; blank means the issue is not tied to a file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    /// Line in the affected file. Requires `file_path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,

    /// Text of the finding. Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Numeric priority. Any value is acceptable; ordering is up to the
    /// consumer.
    #[serde(default)]
    pub priority: i32,

    /// Human-readable label for the priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_name: Option<String>,

    /// Id of the violated rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,

    /// Link to documentation for the violated rule. Expected to accompany
    /// `rule`, though that is not enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_url: Option<RuleUrl>,

    /// Type id of the provider that produced the issue. Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<String>,
}

impl TryFrom<RawIssue> for Issue {
    type Error = IssueError;

    fn try_from(raw: RawIssue) -> Result<Self, Self::Error> {
        let line = validate::require_positive_line(raw.line)?;
        let message = validate::require_non_blank(raw.message.as_deref(), "message")?;
        let provider_type =
            validate::require_non_blank(raw.provider_type.as_deref(), "provider_type")?;

        let file_path = match raw.file_path.as_deref() {
            Some(reported) => path::normalize_file_path(reported)?,
            None => None,
        };
        if file_path.is_none() && line.is_some() {
            return Err(IssueError::out_of_range(
                "line",
                "cannot specify a line without a file",
            ));
        }

        Ok(Issue {
            project: raw.project,
            file_path,
            line,
            message,
            priority: raw.priority,
            priority_name: raw.priority_name,
            rule: raw.rule,
            rule_url: raw.rule_url,
            provider_type,
        })
    }
}

impl Issue {
    /// Name of the logical project the affected file belongs to.
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    /// Path of the affected file, relative to the repository root.
    /// `None` when the issue is not tied to a file.
    pub fn file_path(&self) -> Option<&Utf8Path> {
        self.file_path.as_deref()
    }

    /// Line in the affected file. `None` when the issue applies to the
    /// whole file, or has no file at all.
    pub fn line(&self) -> Option<u64> {
        self.line
    }

    /// Text of the finding.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Numeric priority. Higher-is-more-important is a convention of the
    /// consumer, not of this type.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Human-readable label for the priority, e.g. "Warning".
    pub fn priority_name(&self) -> Option<&str> {
        self.priority_name.as_deref()
    }

    /// Id of the violated rule.
    pub fn rule(&self) -> Option<&str> {
        self.rule.as_deref()
    }

    /// Link to documentation for the violated rule.
    pub fn rule_url(&self) -> Option<&RuleUrl> {
        self.rule_url.as_ref()
    }

    /// Type id of the provider that produced the issue.
    pub fn provider_type(&self) -> &str {
        &self.provider_type
    }
}
