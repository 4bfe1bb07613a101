//! Network data retrieval split into submodules.
//!
//! `fetch` holds the HTTP capability, `view` and `manifest` decode the two
//! payloads a view load needs, and `service` covers the auxiliary endpoints.

mod error;
mod fetch;
mod manifest;
mod service;
mod view;

pub use error::{FetchError, FetchResult};
pub use fetch::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, HttpFetch, ReqwestFetch};
pub use manifest::{CONTENT_ADVISORY_LABEL, extract_advisory};
pub use service::{
    HealthStatus, OEmbed, build_oembed_url, fetch_health, fetch_oembed, fetch_version,
};
pub use view::{
    IiifData, VIEW_API_PATH, ViewPayload, build_view_url, parse_view_envelope, split_page_pids,
};
