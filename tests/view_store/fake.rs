//! In-memory `HttpFetch` used by the integration tests.
//!
//! The library's `ScriptedFetch` is compiled only for unit tests, so this
//! target carries its own fake.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use curio::sources::{FetchError, FetchResult, HttpFetch};

/// Base URL used by every test store.
pub const BASE: &str = "http://curio.test";

/// What: Fake fetcher keyed by full URL.
///
/// Details:
/// - Each route holds an optional delay and a canned result.
/// - Unknown URLs fail with `FetchError::Transport`.
#[derive(Default)]
pub struct FakeFetch {
    /// URL to `(delay in ms, canned result)`.
    routes: HashMap<String, (u64, FetchResult<String>)>,
    /// URLs requested so far, in order.
    calls: Mutex<Vec<String>>,
}

impl FakeFetch {
    /// Empty fake; every URL fails until routes are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` at `url` after `delay_ms`.
    pub fn body(mut self, url: &str, delay_ms: u64, body: &str) -> Self {
        self.routes
            .insert(url.to_string(), (delay_ms, Ok(body.to_string())));
        self
    }

    /// Fail `url` with HTTP `status` and an optional body after `delay_ms`.
    pub fn status(mut self, url: &str, delay_ms: u64, status: u16, body: Option<&str>) -> Self {
        self.routes.insert(
            url.to_string(),
            (
                delay_ms,
                Err(FetchError::Status {
                    status,
                    url: url.to_string(),
                    body: body.map(str::to_string),
                }),
            ),
        );
        self
    }

    /// URLs requested so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls mutex").clone()
    }
}

impl HttpFetch for FakeFetch {
    async fn get_text(&self, url: &str) -> FetchResult<String> {
        self.calls.lock().expect("calls mutex").push(url.to_string());
        let Some((delay, result)) = self.routes.get(url) else {
            return Err(FetchError::Transport(format!("connection refused: {url}")));
        };
        if *delay > 0 {
            tokio::time::sleep(Duration::from_millis(*delay)).await;
        }
        result.clone()
    }
}

/// `/api/view` URL for `pid` at page 1 without a unit.
pub fn view_url(pid: &str) -> String {
    format!("{BASE}/api/view/{pid}?page=1")
}
