//! View-state store: fetch orchestration and lifecycle tracking.
//!
//! The store owns the single [`ViewState`] of the client. A load runs a
//! two-stage pipeline: the primary view request is required, the IIIF
//! manifest request that follows it is best-effort enrichment. Every load
//! takes a generation token; results of a load that has since been superseded
//! are dropped, so the most recently issued load always wins.

mod pipeline;

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::sources::{FetchError, HttpFetch, ViewPayload, build_view_url};
use crate::state::{ViewState, ViewType};

/// How a `load_view` call ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The result was applied; the payload has this record kind.
    Loaded(ViewType),
    /// The load failed and `failed` was raised.
    Failed,
    /// A newer load started before this one finished; its result was dropped.
    Superseded,
}

/// Owner of the client view state.
///
/// Construct one per application session and hand references to consumers.
pub struct ViewStateStore<F> {
    /// HTTP capability used for both fetch stages.
    fetch: F,
    /// Service base URL prepended to `/api/view`.
    base_url: String,
    /// Current state; receivers observe every mutation.
    state: watch::Sender<ViewState>,
    /// Token of the most recently started load.
    generation: AtomicU64,
}

impl<F: HttpFetch> ViewStateStore<F> {
    /// What: Create a store with all-default state.
    ///
    /// Inputs:
    /// - `fetch`: HTTP capability.
    /// - `base_url`: Service base URL (empty for same-origin relative requests).
    ///
    /// Output:
    /// - Idle store at generation 0.
    #[must_use]
    pub fn new(fetch: F, base_url: impl Into<String>) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self {
            fetch,
            base_url: base_url.into(),
            state,
            generation: AtomicU64::new(0),
        }
    }

    /// Service base URL this store requests from.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// HTTP capability shared with auxiliary calls.
    #[must_use]
    pub const fn fetcher(&self) -> &F {
        &self.fetch
    }

    /// Clone of the current state.
    #[must_use]
    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Token of the most recently started load.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// What: Acknowledge the content advisory of the current load.
    ///
    /// Details:
    /// - Only sets `advisory_dismissed`; calling it again is a no-op.
    pub fn clear_advisory(&self) {
        self.state.send_modify(ViewState::dismiss_advisory);
    }

    /// What: Load the view data of a record.
    ///
    /// Inputs:
    /// - `pid`: Record identifier.
    /// - `page`: Start page requested by the router.
    /// - `unit`: Optional unit identifier forwarded as a query parameter.
    ///
    /// Output:
    /// - `LoadOutcome` describing whether the result was applied.
    ///
    /// Details:
    /// - Flags and advisory reset before any network activity.
    /// - Primary request failure (transport, status, malformed envelope) raises
    ///   `failed` and keeps the previous payload.
    /// - Manifest fetch failure is ignored; the load succeeds without advisory.
    /// - No error escapes; failures surface through the `failed` flag.
    pub async fn load_view(&self, pid: &str, page: i64, unit: Option<&str>) -> LoadOutcome {
        let mut token = 0;
        self.state.send_modify(|s| {
            token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            s.begin_load(pid);
        });
        info!(pid = pid, page = page, unit = ?unit, generation = token, "loading view");

        let url = match build_view_url(&self.base_url, pid, page, unit) {
            Ok(url) => url,
            Err(e) => return self.fail(token, pid, &e),
        };
        let payload = match pipeline::fetch_view(&self.fetch, &url).await {
            Ok(payload) => payload,
            Err(e) => return self.fail(token, pid, &e),
        };
        if !self.is_current(token) {
            debug!(pid = pid, generation = token, "dropping superseded view response");
            return LoadOutcome::Superseded;
        }

        let advisory = match &payload {
            ViewPayload::Iiif(data) => pipeline::fetch_advisory(&self.fetch, &data.iiif).await,
            ViewPayload::Wsls(_) | ViewPayload::Archivematica(_) => None,
        };
        let view_type = payload.view_type();
        let view = payload.into_view_data();
        let applied = self.apply_if_current(token, |s| s.finish_load(view, advisory));
        if applied {
            info!(
                pid = pid,
                view_type = view_type.as_str(),
                generation = token,
                "view loaded"
            );
            LoadOutcome::Loaded(view_type)
        } else {
            debug!(pid = pid, generation = token, "dropping superseded view result");
            LoadOutcome::Superseded
        }
    }

    /// Whether `token` still identifies the latest load.
    fn is_current(&self, token: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == token
    }

    /// What: Mutate the state only if `token` is still the latest load.
    ///
    /// Output:
    /// - `true` when the mutation was applied and receivers notified.
    fn apply_if_current(&self, token: u64, f: impl FnOnce(&mut ViewState)) -> bool {
        self.state.send_if_modified(|s| {
            if self.is_current(token) {
                f(s);
                true
            } else {
                false
            }
        })
    }

    /// Record a primary-stage failure for load `token`.
    fn fail(&self, token: u64, pid: &str, error: &FetchError) -> LoadOutcome {
        if self.apply_if_current(token, ViewState::fail_load) {
            warn!(
                pid = pid,
                generation = token,
                status = ?error.status_code(),
                error = %error,
                "view load failed"
            );
            LoadOutcome::Failed
        } else {
            debug!(pid = pid, generation = token, error = %error, "ignoring failure of superseded load");
            LoadOutcome::Superseded
        }
    }
}
