//! Normalization for file paths attached to issues.
//!
//! Analyzers report paths in whatever shape their host platform produces.
//! Issues store one canonical form: forward slashes, no leading `./`, no
//! trailing slash, relative to the repository root. Parent-traversal
//! segments (`..`) are kept as-is, never resolved.

use camino::Utf8PathBuf;

use crate::error::{IssueError, IssueResult};

/// Characters that cannot appear in a well-formed path on any supported
/// platform.
const INVALID_PATH_CHARS: &[char] = &['<', '>', '"', '|', '?', '*'];

/// Normalizes a raw file path reported for an issue.
///
/// A blank (empty or whitespace-only) input is not an error; it means the
/// issue is not tied to a file and yields `Ok(None)`. A non-blank input must
/// be a syntactically valid relative path. Absolute paths of any flavor
/// (rooted, drive-letter, UNC) are rejected because issues are always
/// located relative to the repository root.
///
/// Normalization is idempotent: feeding the output back in returns it
/// unchanged.
pub fn normalize_file_path(raw: &str) -> IssueResult<Option<Utf8PathBuf>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let mut path = trimmed.replace('\\', "/");

    while let Some(rest) = path.strip_prefix("./") {
        path = rest.to_string();
    }
    while path.ends_with('/') {
        path.pop();
    }

    if let Some(bad) = path
        .chars()
        .find(|c| c.is_control() || INVALID_PATH_CHARS.contains(c))
    {
        return Err(IssueError::out_of_range(
            "file_path",
            format!("invalid character {bad:?} in path"),
        ));
    }

    // Detected on the stripped text: ".//foo" reduces to "/foo".
    if is_absolute(&path) {
        return Err(IssueError::out_of_range(
            "file_path",
            "path must be relative to the repository root",
        ));
    }

    // A non-blank input that reduces to nothing (e.g. "./") names no file.
    if path.is_empty() {
        return Err(IssueError::out_of_range(
            "file_path",
            "path has no file component",
        ));
    }

    Ok(Some(Utf8PathBuf::from(path)))
}

/// Absolute-path detection that works the same on every host platform.
///
/// `Utf8Path::is_absolute` answers for the current platform only; a
/// drive-letter path must be rejected on Linux too.
fn is_absolute(path: &str) -> bool {
    if path.starts_with('/') {
        return true;
    }
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
