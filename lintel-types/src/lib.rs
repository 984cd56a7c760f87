//! Shared issue model for the lintel workspace.
//!
//! # Design constraints
//! - Issues are validated once, at construction, and read-only afterwards.
//! - Providers hand in raw values "as found"; normalization happens here.
//! - Prefer adding optional fields over changing the meaning of existing ones.

pub mod error;
pub mod issue;
pub mod path;
pub mod priority;
pub mod rule;
pub mod validate;
