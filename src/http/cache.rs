//! HTTP cache validation module
//!
//! `ETag` generation and `If-None-Match` evaluation for bundle assets.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Generate a strong `ETag` for an asset body.
///
/// The tag combines content length and a content hash, quoted per RFC 9110,
/// e.g. `"16-9a3bc44d"`.
#[must_use]
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("\"{:x}-{:x}\"", content.len(), hasher.finish())
}

/// Evaluate a client's `If-None-Match` header against the asset's `ETag`.
///
/// Handles single tags, comma-separated lists, and the `*` wildcard.
/// Returns true when the client copy is current and a 304 applies.
#[must_use]
pub fn check_etag_match(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|header| {
        header.split(',').any(|tag| {
            let tag = tag.trim();
            tag == etag || tag == "*"
        })
    })
}
