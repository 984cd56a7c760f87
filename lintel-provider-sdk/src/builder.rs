//! Fluent construction of issues.

use camino::Utf8PathBuf;
use tracing::debug;

use lintel_types::error::{IssueError, IssueResult};
use lintel_types::issue::{Issue, RawIssue};
use lintel_types::path::normalize_file_path;
use lintel_types::priority::IssuePriority;
use lintel_types::rule::RuleUrl;
use lintel_types::validate::{require_non_blank, require_positive_line};

use crate::provider::IssueProvider;

/// Fluent builder for one issue.
///
/// Obtained from [`IssueBuilder::new`] or [`IssueBuilder::for_provider`],
/// configured through chained calls and finalized with
/// [`IssueBuilder::build`]. Fallible calls validate their arguments
/// immediately and return `Result`, so a chain aborts at the first bad
/// value:
///
/// ```
/// use lintel_provider_sdk::IssueBuilder;
/// use lintel_types::priority::IssuePriority;
///
/// # fn main() -> Result<(), lintel_types::error::IssueError> {
/// let issue = IssueBuilder::new("Unused variable `x`", "rustc", "Rust compiler")?
///     .in_project("core")
///     .in_file_line("src/lib.rs", 42)?
///     .with_priority_level(IssuePriority::Warning)?
///     .of_rule("unused_variables")?
///     .build()?;
/// assert_eq!(issue.priority(), 300);
/// # Ok(())
/// # }
/// ```
///
/// One builder describes one logical issue; it can stamp that issue more
/// than once, but sharing a builder across different findings is not a
/// supported pattern.
#[derive(Debug, Clone)]
pub struct IssueBuilder {
    project: Option<String>,
    file_path: Option<Utf8PathBuf>,
    line: Option<u64>,
    message: String,
    priority: i32,
    priority_name: Option<String>,
    rule: Option<String>,
    rule_url: Option<RuleUrl>,
    provider_type: String,
    provider_name: String,
}

impl IssueBuilder {
    /// Starts an issue from raw provider identity.
    ///
    /// All three arguments are required and must be non-blank.
    pub fn new<'a>(
        message: impl Into<Option<&'a str>>,
        provider_type: impl Into<Option<&'a str>>,
        provider_name: impl Into<Option<&'a str>>,
    ) -> IssueResult<Self> {
        let message = require_non_blank(message.into(), "message")?;
        let provider_type = require_non_blank(provider_type.into(), "provider_type")?;
        let provider_name = require_non_blank(provider_name.into(), "provider_name")?;

        Ok(IssueBuilder {
            project: None,
            file_path: None,
            line: None,
            message,
            priority: 0,
            priority_name: None,
            rule: None,
            rule_url: None,
            provider_type,
            provider_name,
        })
    }

    /// Starts an issue attributed to `provider`.
    ///
    /// The provider's identity flows through the same validation as
    /// [`IssueBuilder::new`]; an absent provider fails as a missing
    /// `issue_provider` argument.
    pub fn for_provider<'a, P>(
        message: impl Into<Option<&'a str>>,
        provider: Option<&'a P>,
    ) -> IssueResult<Self>
    where
        P: IssueProvider + ?Sized,
    {
        let provider = provider.ok_or_else(|| IssueError::missing("issue_provider"))?;
        IssueBuilder::new(message, provider.provider_type(), provider.provider_name())
    }

    /// Sets the project the affected file belongs to.
    ///
    /// A passthrough: the value is stored verbatim, blank or not, and an
    /// absent value clears it. Never fails.
    pub fn in_project<'a>(mut self, project: impl Into<Option<&'a str>>) -> Self {
        self.project = project.into().map(str::to_string);
        self
    }

    /// Sets the affected file, with no line.
    ///
    /// A blank or absent path means the issue is not tied to a file. The
    /// path is normalized and must be relative to the repository root.
    pub fn in_file<'a>(self, file_path: impl Into<Option<&'a str>>) -> IssueResult<Self> {
        self.in_file_line(file_path, None)
    }

    /// Sets the affected file and line together.
    ///
    /// File and line are one atomic location: this call replaces whatever
    /// location was set before. The line, when present, must be positive;
    /// an absent line with a file is valid and records a file-level issue.
    pub fn in_file_line<'a>(
        mut self,
        file_path: impl Into<Option<&'a str>>,
        line: impl Into<Option<u64>>,
    ) -> IssueResult<Self> {
        let line = require_positive_line(line.into())?;
        let file_path = match file_path.into() {
            Some(reported) => normalize_file_path(reported)?,
            None => None,
        };

        self.file_path = file_path;
        self.line = line;
        Ok(self)
    }

    /// Sets the numeric priority and its display name.
    ///
    /// Any `i32` is acceptable as the priority; the name is required and
    /// must be non-blank.
    pub fn with_priority<'a>(
        mut self,
        priority: i32,
        name: impl Into<Option<&'a str>>,
    ) -> IssueResult<Self> {
        self.priority_name = Some(require_non_blank(name.into(), "name")?);
        self.priority = priority;
        Ok(self)
    }

    /// Sets the priority from a well-known level.
    pub fn with_priority_level(self, level: IssuePriority) -> IssueResult<Self> {
        self.with_priority(level.value(), level.name())
    }

    /// Sets the violated rule.
    pub fn of_rule<'a>(mut self, name: impl Into<Option<&'a str>>) -> IssueResult<Self> {
        self.rule = Some(require_non_blank(name.into(), "name")?);
        Ok(self)
    }

    /// Sets the violated rule together with a documentation link.
    ///
    /// The rule name is validated first; the URL is then required to be
    /// present. Its text round-trips verbatim onto the record.
    pub fn of_rule_with_url<'a>(
        mut self,
        name: impl Into<Option<&'a str>>,
        url: impl Into<Option<RuleUrl>>,
    ) -> IssueResult<Self> {
        let rule = require_non_blank(name.into(), "name")?;
        let url = url.into().ok_or_else(|| IssueError::missing("uri"))?;

        self.rule = Some(rule);
        self.rule_url = Some(url);
        Ok(self)
    }

    /// Human-readable name of the provider this issue is attributed to.
    ///
    /// Validated at creation and retained for display; it is not a field of
    /// the finished record.
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    /// Materializes the immutable issue.
    ///
    /// Runs the record's canonical validation over the accumulated fields.
    /// Per-call validation makes most failures impossible here; the
    /// cross-field check (a line stored without a file) still applies.
    pub fn build(&self) -> IssueResult<Issue> {
        let issue = Issue::try_from(RawIssue {
            project: self.project.clone(),
            file_path: self.file_path.as_ref().map(|p| p.as_str().to_string()),
            line: self.line,
            message: Some(self.message.clone()),
            priority: self.priority,
            priority_name: self.priority_name.clone(),
            rule: self.rule.clone(),
            rule_url: self.rule_url.clone(),
            provider_type: Some(self.provider_type.clone()),
        })?;

        debug!(provider_type = %issue.provider_type(), "issue materialized");
        Ok(issue)
    }
}

#[cfg(test)]
mod tests {
    use super::IssueBuilder;

    #[test]
    fn minimal_chain_uses_defaults() {
        let issue = IssueBuilder::new("Message", "ProviderType", "ProviderName")
            .expect("identity")
            .build()
            .expect("issue");

        assert_eq!(issue.message(), "Message");
        assert_eq!(issue.provider_type(), "ProviderType");
        assert_eq!(issue.priority(), 0);
        assert_eq!(issue.priority_name(), None);
        assert_eq!(issue.project(), None);
        assert_eq!(issue.file_path(), None);
        assert_eq!(issue.line(), None);
    }

    #[test]
    fn provider_name_is_retained_on_the_builder() {
        let builder =
            IssueBuilder::new("Message", "ProviderType", "ProviderName").expect("identity");
        assert_eq!(builder.provider_name(), "ProviderName");
    }

    #[test]
    fn build_can_stamp_the_issue_repeatedly() {
        let builder = IssueBuilder::new("Message", "ProviderType", "ProviderName")
            .expect("identity")
            .in_file("foo")
            .expect("file");

        let first = builder.build().expect("first");
        let second = builder.build().expect("second");
        assert_eq!(first.file_path(), second.file_path());
        assert_eq!(first.message(), second.message());
    }
}
