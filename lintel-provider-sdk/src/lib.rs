//! SDK for building issue providers.
//!
//! A provider parses some tool log or report and, for each finding, runs one
//! [`IssueBuilder`] chain: identity first, then location, priority and rule,
//! then [`IssueBuilder::build`] to materialize the immutable record. Every
//! call validates its own arguments, so a bad extraction fails at the line
//! that supplied the bad value rather than at the end of the chain.

mod builder;
mod provider;

pub use builder::IssueBuilder;
pub use provider::IssueProvider;
