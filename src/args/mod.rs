//! Command-line argument parsing and handling.

pub mod definition;
pub mod render;
pub mod service;
pub mod utils;
pub mod view;

pub use definition::{Args, Command};
pub use utils::determine_log_level;

use curio::config::Settings;

use crate::args::view::ViewRequest;

/// What: Run the parsed subcommand.
///
/// Inputs:
/// - `args`: Parsed arguments.
/// - `settings`: Settings with command-line overrides already applied.
///
/// Output:
/// - `Ok(true)` on success, `Ok(false)` when the command completed but reported failure.
///
/// # Errors
/// - HTTP client construction or command errors.
pub async fn run(args: Args, settings: &Settings) -> utils::Result<bool> {
    let fetch = utils::build_fetcher(settings)?;
    match args.command {
        Command::View {
            pid,
            page,
            unit,
            json,
            dismiss_advisory,
        } => {
            let req = ViewRequest {
                pid,
                page,
                unit,
                json,
                dismiss_advisory,
            };
            view::handle_view(fetch, settings, &req).await
        }
        Command::Health => service::handle_health(&fetch, settings).await,
        Command::Version => service::handle_version(&fetch, settings).await,
        Command::Oembed {
            url,
            max_width,
            max_height,
        } => service::handle_oembed(&fetch, settings, &url, max_width, max_height).await,
    }
}
