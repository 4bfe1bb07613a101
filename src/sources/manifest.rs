//! IIIF manifest metadata scanning.

use serde_json::Value;
use tracing::debug;

/// Metadata label that flags sensitive content.
pub const CONTENT_ADVISORY_LABEL: &str = "Content Advisory";

/// What: Read the display text of a IIIF metadata label or value.
///
/// Inputs:
/// - `v`: A `label` or `value` node.
///
/// Output:
/// - The text, or `None` for shapes that carry none.
///
/// Details:
/// - Accepts a plain string, a `{"@value": ..}` object, or a list of either
///   (first usable entry wins, as for presentation 2 language lists).
fn metadata_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Object(_) => crate::util::ss(v, &["@value", "value"]),
        Value::Array(items) => items.iter().find_map(metadata_text),
        _ => None,
    }
}

/// What: Find the content advisory in a manifest.
///
/// Inputs:
/// - `manifest`: Parsed IIIF manifest.
///
/// Output:
/// - `Some(text)` when a metadata entry is labelled `Content Advisory`.
///
/// Details:
/// - Scans `metadata` in order; when the label repeats, the last entry wins.
/// - Missing or non-list `metadata` yields `None`.
#[must_use]
pub fn extract_advisory(manifest: &Value) -> Option<String> {
    let entries = manifest.get("metadata").and_then(Value::as_array)?;
    let mut found = None;
    for entry in entries {
        let Some(label) = entry.get("label").and_then(metadata_text) else {
            continue;
        };
        if label != CONTENT_ADVISORY_LABEL {
            continue;
        }
        if let Some(value) = entry.get("value").and_then(metadata_text) {
            found = Some(value);
        }
    }
    debug!(found = found.is_some(), entries = entries.len(), "scanned manifest metadata");
    found
}
