//! Service-level endpoints: health check, version and oEmbed.

use serde_json::Value;
use tracing::{info, warn};

use super::{FetchError, FetchResult, HttpFetch};
use crate::util::percent_encode;

/// Backend status reported by `/healthcheck`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    /// The service itself answered.
    pub alive: bool,
    /// IIIF manifest service reachable.
    pub iiif: bool,
    /// `TrackSys` reachable.
    pub tracksys: bool,
}

impl HealthStatus {
    /// All dependencies are up.
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        self.alive && self.iiif && self.tracksys
    }
}

/// oEmbed document returned for an embeddable item.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OEmbed {
    /// oEmbed version, normally `1.0`.
    pub version: String,
    /// `rich` or `video`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Item title.
    pub title: String,
    /// Item author.
    pub author: String,
    /// Embeddable HTML snippet.
    pub html: String,
    /// Frame width.
    pub width: u32,
    /// Frame height.
    pub height: u32,
    /// Provider name.
    pub provider: String,
    /// Provider home page.
    pub provider_url: String,
}

/// Join `base` and an absolute `path`.
fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// What: Query the service health check.
///
/// Inputs:
/// - `fetch`: HTTP capability.
/// - `base`: Service base URL.
///
/// Output:
/// - Parsed `HealthStatus`.
///
/// Details:
/// - The service answers 500 with the same JSON body when a dependency is down;
///   that body is still decoded so callers see which dependency failed.
///
/// # Errors
/// - Transport failures, non-JSON bodies, or a non-success status without a
///   decodable body.
pub async fn fetch_health<F: HttpFetch>(fetch: &F, base: &str) -> FetchResult<HealthStatus> {
    let url = endpoint(base, "/healthcheck");
    let body = match fetch.get_text(&url).await {
        Ok(body) => body,
        Err(FetchError::Status {
            status,
            body: Some(body),
            ..
        }) => {
            warn!(status = status, "health check reported a failing dependency");
            body
        }
        Err(e) => return Err(e),
    };
    let health: HealthStatus = serde_json::from_str(body.trim())?;
    info!(
        alive = health.alive,
        iiif = health.iiif,
        tracksys = health.tracksys,
        "health check"
    );
    Ok(health)
}

/// What: Fetch the service version banner.
///
/// Output:
/// - Trimmed text such as `Curio version 1.2.0`.
///
/// # Errors
/// - Transport failures or non-success statuses.
pub async fn fetch_version<F: HttpFetch>(fetch: &F, base: &str) -> FetchResult<String> {
    let text = fetch.get_text(&endpoint(base, "/version")).await?;
    Ok(text.trim().to_string())
}

/// What: Build the oEmbed request URL for an item page.
///
/// Inputs:
/// - `base`: Service base URL.
/// - `item_url`: Public item URL, e.g. `https://curio.example/view/uva-lib:123`.
/// - `max_width` / `max_height`: Optional frame bounds.
///
/// Output:
/// - `{base}/oembed?url={item_url}&format=json[&maxwidth=..][&maxheight=..]`.
#[must_use]
pub fn build_oembed_url(
    base: &str,
    item_url: &str,
    max_width: Option<u32>,
    max_height: Option<u32>,
) -> String {
    let mut url = format!(
        "{}?url={}&format=json",
        endpoint(base, "/oembed"),
        percent_encode(item_url)
    );
    if let Some(w) = max_width {
        url.push_str(&format!("&maxwidth={w}"));
    }
    if let Some(h) = max_height {
        url.push_str(&format!("&maxheight={h}"));
    }
    url
}

/// What: Fetch the oEmbed document for an item page.
///
/// # Errors
/// - `FetchError::InvalidRequest` for an empty item URL; transport, status or
///   decode failures otherwise.
pub async fn fetch_oembed<F: HttpFetch>(
    fetch: &F,
    base: &str,
    item_url: &str,
    max_width: Option<u32>,
    max_height: Option<u32>,
) -> FetchResult<OEmbed> {
    if item_url.trim().is_empty() {
        return Err(FetchError::InvalidRequest("item URL must not be empty".into()));
    }
    let url = build_oembed_url(base, item_url, max_width, max_height);
    let v: Value = fetch.get_json(&url).await?;
    Ok(serde_json::from_value(v)?)
}
