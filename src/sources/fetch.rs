//! HTTP capability used by the store and the service calls.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use super::{FetchError, FetchResult};

/// Default connect timeout, matching the service's own outbound client.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// Default whole-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// What: Minimal GET capability the view store depends on.
///
/// Details:
/// - Implementations must map non-success statuses to [`FetchError::Status`].
/// - `get_json` has a default built on `get_text`.
#[allow(async_fn_in_trait)]
pub trait HttpFetch {
    /// Fetch `url` and return the body as text.
    async fn get_text(&self, url: &str) -> FetchResult<String>;

    /// Fetch `url` and parse the body as JSON.
    async fn get_json(&self, url: &str) -> FetchResult<Value> {
        let body = self.get_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// `reqwest`-backed fetcher.
#[derive(Clone, Debug)]
pub struct ReqwestFetch {
    /// Shared connection pool.
    client: reqwest::Client,
}

impl ReqwestFetch {
    /// What: Build a fetcher with explicit timeouts.
    ///
    /// Inputs:
    /// - `connect_timeout`: Limit for establishing a connection.
    /// - `request_timeout`: Limit for the whole request including the body.
    ///
    /// Output:
    /// - `Ok(ReqwestFetch)`; `Err(FetchError::Transport)` if the client cannot be built.
    ///
    /// # Errors
    /// - TLS backend or client builder failure.
    pub fn new(connect_timeout: Duration, request_timeout: Duration) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .user_agent(concat!("curio/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// What: Send a GET and fail on non-success statuses.
    ///
    /// Details:
    /// - The body of a failed response is kept (first 300 chars logged) since the
    ///   health check reports details through a 500 body.
    async fn send(&self, url: &str) -> FetchResult<reqwest::Response> {
        debug!(url = url, "GET");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.ok();
        let preview: String = body
            .as_deref()
            .unwrap_or_default()
            .chars()
            .take(300)
            .collect();
        warn!(
            status = status.as_u16(),
            url = url,
            preview = preview,
            "non-success status"
        );
        Err(FetchError::Status {
            status: status.as_u16(),
            url: url.to_string(),
            body,
        })
    }
}

impl HttpFetch for ReqwestFetch {
    async fn get_text(&self, url: &str) -> FetchResult<String> {
        let resp = self.send(url).await?;
        let body = resp.text().await?;
        debug!(url = url, bytes = body.len(), "fetched text");
        Ok(body)
    }

    async fn get_json(&self, url: &str) -> FetchResult<Value> {
        let resp = self.send(url).await?;
        Ok(resp.json::<Value>().await?)
    }
}
