//! `curio view`: load a record's view data through the store and print it.

use curio::config::Settings;
use curio::sources::HttpFetch;
use curio::store::{LoadOutcome, ViewStateStore};

use crate::args::render::render_state;
use crate::args::utils::Result;

/// Options of the `view` subcommand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewRequest {
    /// Record PID.
    pub pid: String,
    /// Start page.
    pub page: i64,
    /// Optional unit identifier.
    pub unit: Option<String>,
    /// Print JSON instead of text.
    pub json: bool,
    /// Acknowledge the advisory after loading.
    pub dismiss_advisory: bool,
}

/// What: Load a record and print the resulting view state.
///
/// Inputs:
/// - `fetch`: HTTP capability.
/// - `settings`: Resolved settings (base URL).
/// - `req`: Subcommand options.
///
/// Output:
/// - `Ok(true)` when the load succeeded, `Ok(false)` when the store raised `failed`.
///
/// # Errors
/// - JSON serialization of the state fails.
pub async fn handle_view<F: HttpFetch>(
    fetch: F,
    settings: &Settings,
    req: &ViewRequest,
) -> Result<bool> {
    tracing::info!(pid = %req.pid, page = req.page, "view requested from CLI");
    let store = ViewStateStore::new(fetch, settings.api_base_url.clone());
    let outcome = store
        .load_view(&req.pid, req.page, req.unit.as_deref())
        .await;
    if req.dismiss_advisory {
        store.clear_advisory();
    }
    let state = store.snapshot();
    if req.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print!("{}", render_state(&state));
    }
    let ok = matches!(outcome, LoadOutcome::Loaded(_));
    if !ok {
        eprintln!(
            "failed to load view data for {} from {}",
            req.pid,
            store.base_url()
        );
    }
    Ok(ok)
}
