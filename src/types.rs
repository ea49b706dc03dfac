//! Core domain types for versioned references, locations, and dead links.

use std::fmt;

/// A content hash — 64 hex chars, always lowercase.
/// Newtype prevents mixing with arbitrary strings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContentHash(
    /// The hex-encoded SHA-256 digest string.
    pub String,
);

/// Where a reference or dead link was found: one file on one branch of one
/// repository. The URL is always credential-redacted before construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Branch the working tree was checked out to.
    pub branch: String,
    /// File path relative to the working directory root.
    pub file: String,
    /// Credential-redacted repository URL.
    pub url: String,
}

impl fmt::Display for Location {
    /// Renders as a browsable blob URL: `{url}/-/blob/{branch}/{file}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}/-/blob/{}/{}", self.url, self.branch, self.file);
    }
}

/// One versioned documentation fragment found in one file.
/// Immutable after creation; consumed only by the aggregator.
#[derive(Debug, Clone)]
pub struct Reference {
    /// Digest of `value` combined with `version` — the equality test for
    /// "same content" across locations.
    pub hash: ContentHash,
    /// Where this fragment was found.
    pub location: Location,
    /// Identifier, unique only in combination with `version`.
    pub name: String,
    /// Literal fragment text, whitespace-sensitive.
    pub value: String,
    /// Non-negative version; higher means more current.
    pub version: u64,
}

/// One non-resolving URL found in a scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadLink {
    /// File path relative to the working directory, within the task.
    pub file: String,
    /// The raw URL as extracted from the file.
    pub link: String,
    /// HTTP status observed, or [`crate::links::STATUS_PROBE_FAILED`]
    /// when the request failed entirely.
    pub status: i32,
}

/// Render a location list the way report lines expect it.
pub fn format_locations(locations: &[Location]) -> String {
    let rendered: Vec<String> = locations.iter().map(Location::to_string).collect();
    return format!("[{}]", rendered.join(", "));
}
