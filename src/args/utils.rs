//! Shared utilities for argument processing.

use curio::config::Settings;
use curio::sources::ReqwestFetch;

use crate::args::Args;

/// Error type returned by command handlers.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Determine the log level from flags and settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Resolved settings.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - `--verbose` wins over `--log-level`, which wins over `settings.conf`.
pub fn determine_log_level(args: &Args, settings: &Settings) -> String {
    if args.verbose {
        "debug".to_string()
    } else if let Some(level) = &args.log_level {
        level.clone()
    } else {
        settings.log_level.clone()
    }
}

/// What: Build the HTTP client from resolved timeouts.
///
/// # Errors
/// - Client construction failure.
pub fn build_fetcher(settings: &Settings) -> Result<ReqwestFetch> {
    Ok(ReqwestFetch::new(
        settings.connect_timeout(),
        settings.request_timeout(),
    )?)
}
