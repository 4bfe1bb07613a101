//! The two fetch stages of a view load.

use tracing::debug;

use crate::sources::{FetchResult, HttpFetch, ViewPayload, extract_advisory, parse_view_envelope};

/// What: Required stage: fetch and decode the view envelope.
///
/// # Errors
/// - Any transport, status, decode or envelope-shape failure.
pub(super) async fn fetch_view<F: HttpFetch>(fetch: &F, url: &str) -> FetchResult<ViewPayload> {
    let envelope = fetch.get_json(url).await?;
    parse_view_envelope(envelope)
}

/// What: Optional stage: fetch the IIIF manifest and read its advisory.
///
/// Output:
/// - Advisory text, or `None` when absent or when the manifest is unavailable.
pub(super) async fn fetch_advisory<F: HttpFetch>(fetch: &F, manifest_url: &str) -> Option<String> {
    match fetch.get_json(manifest_url).await {
        Ok(manifest) => extract_advisory(&manifest),
        Err(e) => {
            debug!(url = manifest_url, error = %e, "manifest unavailable; no advisory");
            None
        }
    }
}
