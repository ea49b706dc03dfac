/// Content hashing for reference fragments.
use sha2::{Digest as _, Sha256};

use crate::types::ContentHash;

/// Compute the content hash of a reference fragment.
///
/// The digest covers `{value}+{version}` so that two fragments are "the
/// same content" only when both the literal text and the version match.
/// SHA-256 is overkill for an equality check but deterministic, stable
/// across platforms, and already the hash the rest of the toolchain speaks.
pub fn content_hash(value: &str, version: u64) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hasher.update(b"+");
    hasher.update(version.to_string().as_bytes());
    let digest = hasher.finalize();
    return ContentHash(format!("{digest:x}"));
}
