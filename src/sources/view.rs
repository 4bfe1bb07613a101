//! `/api/view/{pid}` request building and envelope parsing.

use serde_json::Value;

use super::{FetchError, FetchResult};
use crate::state::{IiifView, ViewData, ViewType};
use crate::util::percent_encode;

/// Path prefix of the view endpoint.
pub const VIEW_API_PATH: &str = "/api/view";

/// `data` of a `iiif` envelope.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct IiifData {
    /// Manifest URL.
    pub iiif: String,
    /// Rights statement URL.
    pub rights: String,
    /// Comma-separated page PIDs.
    pub page_pids: String,
    /// Start page.
    pub page: i64,
}

/// Decoded view envelope, one variant per record kind.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewPayload {
    /// Image item; the manifest still has to be fetched for the advisory.
    Iiif(IiifData),
    /// Opaque WSLS record.
    Wsls(Value),
    /// Archivematica records, already flattened.
    Archivematica(Vec<Value>),
}

impl ViewPayload {
    /// Record kind of this payload.
    #[must_use]
    pub const fn view_type(&self) -> ViewType {
        match self {
            Self::Iiif(_) => ViewType::Iiif,
            Self::Wsls(_) => ViewType::Wsls,
            Self::Archivematica(_) => ViewType::Archivematica,
        }
    }

    /// What: Convert into the state's tagged view data.
    ///
    /// Details:
    /// - IIIF page PIDs are split into a fresh list.
    #[must_use]
    pub fn into_view_data(self) -> ViewData {
        match self {
            Self::Iiif(d) => ViewData::Iiif(IiifView {
                page_identifiers: split_page_pids(&d.page_pids),
                manifest_url: d.iiif,
                rights_url: d.rights,
                start_page: d.page,
            }),
            Self::Wsls(v) => ViewData::Wsls(v),
            Self::Archivematica(v) => ViewData::Archivematica(v),
        }
    }
}

/// What: Build the primary view request URL.
///
/// Inputs:
/// - `base`: Service base URL, with or without trailing slash (may be empty for same-origin).
/// - `pid`: Record identifier.
/// - `page`: Requested start page.
/// - `unit`: Optional unit identifier.
///
/// Output:
/// - `Ok(url)` of the form `{base}/api/view/{pid}?page={page}[&unit={unit}]`.
///
/// Details:
/// - `pid` and `unit` are percent-encoded.
/// - An empty `unit` is treated as absent.
///
/// # Errors
/// - `FetchError::InvalidRequest` when `pid` is empty or blank.
pub fn build_view_url(base: &str, pid: &str, page: i64, unit: Option<&str>) -> FetchResult<String> {
    if pid.trim().is_empty() {
        return Err(FetchError::InvalidRequest("pid must not be empty".to_string()));
    }
    let mut url = format!(
        "{}{VIEW_API_PATH}/{}?page={page}",
        base.trim_end_matches('/'),
        percent_encode(pid)
    );
    if let Some(u) = unit.filter(|u| !u.is_empty()) {
        url.push_str("&unit=");
        url.push_str(&percent_encode(u));
    }
    Ok(url)
}

/// What: Split a comma-delimited page PID string.
///
/// Inputs:
/// - `raw`: Value of `page_pids`.
///
/// Output:
/// - Tokens in order; empty input yields an empty list.
///
/// Details:
/// - A plain `split(',')` would turn `""` into one empty page; records
///   without pages get no placeholder page here.
#[must_use]
pub fn split_page_pids(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(ToString::to_string).collect()
}

/// What: Decode the `{type, data}` view envelope.
///
/// Inputs:
/// - `envelope`: Parsed JSON body of the view endpoint.
///
/// Output:
/// - `Ok(ViewPayload)` for the three known record kinds.
///
/// Details:
/// - Archivematica `data` is normalized: arrays pass through, a bare object is
///   wrapped into a one-element list.
///
/// # Errors
/// - `FetchError::MalformedResponse` for a missing/unknown `type`, missing
///   `data`, IIIF `data` lacking required fields, or archivematica `data` that is
///   neither object nor array.
pub fn parse_view_envelope(envelope: Value) -> FetchResult<ViewPayload> {
    let Value::Object(mut obj) = envelope else {
        return Err(FetchError::malformed("view envelope is not an object"));
    };
    let tag = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| FetchError::malformed("view envelope has no `type`"))?
        .to_string();
    let kind = ViewType::from_envelope_tag(&tag)
        .ok_or_else(|| FetchError::malformed(format!("unknown view type `{tag}`")))?;
    let data = match obj.remove("data") {
        Some(Value::Null) | None => {
            return Err(FetchError::malformed(format!("`{tag}` envelope has no data")));
        }
        Some(d) => d,
    };
    match kind {
        ViewType::Iiif => serde_json::from_value::<IiifData>(data)
            .map(ViewPayload::Iiif)
            .map_err(|e| FetchError::malformed(format!("iiif data: {e}"))),
        ViewType::Wsls => Ok(ViewPayload::Wsls(data)),
        ViewType::Archivematica => match data {
            Value::Array(items) => Ok(ViewPayload::Archivematica(items)),
            obj @ Value::Object(_) => Ok(ViewPayload::Archivematica(vec![obj])),
            _ => Err(FetchError::malformed(
                "archivematica data is neither object nor array",
            )),
        },
        ViewType::None => Err(FetchError::malformed("view type `none` carries no data")),
    }
}
