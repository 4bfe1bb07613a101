//! Command-line argument definition and processing.

use clap::{Parser, Subcommand};

use curio::config::Settings;

/// Curio - fetch and inspect view data from a Curio digital-collections service
#[derive(Parser, Debug)]
#[command(name = "curio")]
#[command(version)]
#[command(about = "Fetch and inspect view data from a Curio digital-collections service", long_about = None)]
pub struct Args {
    /// Curio service base URL (overrides settings.conf and CURIO_SRV)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Whole-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log to stderr instead of the log file
    #[arg(long, global = true)]
    pub log_stderr: bool,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load the view data of a record and print the resulting view state
    View {
        /// Record PID, e.g. uva-lib:1157560
        pid: String,

        /// Page to open the viewer at
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,

        /// Unit identifier forwarded to the service
        #[arg(short, long)]
        unit: Option<String>,

        /// Print the view state as JSON
        #[arg(long)]
        json: bool,

        /// Acknowledge the content advisory after loading
        #[arg(long)]
        dismiss_advisory: bool,
    },

    /// Query the service health check
    Health,

    /// Print the service version banner
    Version,

    /// Fetch the oEmbed document for an item URL
    Oembed {
        /// Public item URL
        url: String,

        /// Maximum frame width
        #[arg(long)]
        max_width: Option<u32>,

        /// Maximum frame height
        #[arg(long)]
        max_height: Option<u32>,
    },
}

impl Args {
    /// What: Overlay command-line overrides on resolved settings.
    ///
    /// Inputs:
    /// - `settings`: Settings resolved from file and environment.
    ///
    /// Output:
    /// - None (modifies `settings`).
    ///
    /// Details:
    /// - Flags win over `settings.conf` and `CURIO_SRV`.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(url) = self.base_url.as_deref().filter(|u| !u.trim().is_empty()) {
            settings.api_base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(t) = self.timeout_secs {
            settings.request_timeout_secs = t;
        }
        if let Some(level) = &self.log_level {
            settings.log_level = level.to_ascii_lowercase();
        }
        if self.log_stderr {
            settings.log_to_file = false;
        }
    }
}
