//! Curio binary entrypoint kept minimal. Subcommands live in `args`.

mod args;

use std::fmt;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;

use curio::config::{self, Settings};

/// Local-time log timestamps, `YYYY-MM-DD-THH:MM:SS`.
struct CurioTimer;

impl tracing_subscriber::fmt::time::FormatTime for CurioTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now()
            .format("%Y-%m-%d-T%H:%M:%S")
            .to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Build the level filter, preferring `RUST_LOG` over the resolved level.
fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
}

/// Initialize stderr logging.
fn init_stderr_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(false)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_timer(CurioTimer)
        .init();
}

/// What: Initialize tracing to `<config_dir>/logs/curio.log`, or stderr.
///
/// Details:
/// - Falls back to stderr when the log file cannot be opened.
fn init_logging(settings: &Settings, level: &str) {
    if !settings.log_to_file {
        init_stderr_logging(level);
        return;
    }
    let mut log_path = config::logs_dir();
    log_path.push("curio.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(CurioTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            init_stderr_logging(level);
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = args::Args::parse();
    let mut settings = config::load_settings();
    args.apply_to(&mut settings);
    let level = args::determine_log_level(&args, &settings);
    init_logging(&settings, &level);

    tracing::info!(base_url = %settings.api_base_url, "curio starting");
    let code = match args::run(args, &settings).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            tracing::error!(error = %err, "command failed");
            ExitCode::FAILURE
        }
    };
    tracing::info!("curio exited");
    code
}
