//! Client configuration: defaults, `settings.conf`, and environment overrides.

mod parse;
mod paths;

use std::path::Path;
use std::time::Duration;

use tracing::{debug, warn};

pub use parse::parse_settings;
pub use paths::{config_dir, logs_dir, resolve_settings_config_path};

/// Environment variable naming the Curio service, shared with the web front end's dev proxy.
pub const SERVICE_URL_ENV: &str = "CURIO_SRV";

/// Resolved client settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the Curio service.
    pub api_base_url: String,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Default log level when `RUST_LOG` is unset.
    pub log_level: String,
    /// Write logs to `<config_dir>/logs/curio.log` instead of stderr.
    pub log_to_file: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8085".to_string(),
            connect_timeout_secs: crate::sources::DEFAULT_CONNECT_TIMEOUT.as_secs(),
            request_timeout_secs: crate::sources::DEFAULT_REQUEST_TIMEOUT.as_secs(),
            log_level: "info".to_string(),
            log_to_file: true,
        }
    }
}

impl Settings {
    /// Connect timeout as a `Duration`.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Request timeout as a `Duration`.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// What: Apply the service URL environment override.
    ///
    /// Inputs:
    /// - `service_url`: Value of `CURIO_SRV`, if set.
    ///
    /// Details:
    /// - Blank values are ignored.
    pub fn apply_env(&mut self, service_url: Option<&str>) {
        if let Some(url) = service_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api_base_url = url.trim_end_matches('/').to_string();
        }
    }
}

/// What: Load settings from an explicit file over the defaults.
///
/// Inputs:
/// - `path`: Settings file; `None` keeps the defaults.
///
/// Output:
/// - Resolved `Settings`; read failures are logged and fall back to defaults.
#[must_use]
pub fn load_settings_from(path: Option<&Path>) -> Settings {
    let mut settings = Settings::default();
    let Some(path) = path else {
        return settings;
    };
    match std::fs::read_to_string(path) {
        Ok(content) => {
            parse_settings(&content, &mut settings);
            debug!(path = %path.display(), "loaded settings");
        }
        Err(e) => warn!(path = %path.display(), error = %e, "failed to read settings; using defaults"),
    }
    settings
}

/// What: Load settings from the discovered `settings.conf` and the environment.
///
/// Output:
/// - Defaults, overridden by the settings file, overridden by `CURIO_SRV`.
#[must_use]
pub fn load_settings() -> Settings {
    let path = resolve_settings_config_path();
    let mut settings = load_settings_from(path.as_deref());
    settings.apply_env(std::env::var(SERVICE_URL_ENV).ok().as_deref());
    settings
}
