//! PR metadata derived from change results.

use autobump_types::{ChangeResult, PrMetadata};

pub const PR_TITLE: &str = "Bump build manifest images";

/// Fixed title; body is the non-empty messages joined by newlines, in sequence order.
///
/// Pure: identical results always give identical metadata, which the publisher relies on to
/// deduplicate PRs.
pub fn describe(results: &[ChangeResult]) -> PrMetadata {
    let body = results
        .iter()
        .map(|r| r.message.as_str())
        .filter(|m| !m.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    PrMetadata {
        title: PR_TITLE.to_string(),
        body,
    }
}
