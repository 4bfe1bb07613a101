//! View state module.
//!
//! Holds the data model the store mutates and the UI reads: lifecycle flags,
//! the tagged result payload, and the content advisory.

pub mod types;
pub mod view_state;

pub use types::{IiifView, LoadPhase, PackageColumns, PackageNode, ViewData, ViewType, WslsRecord};
pub use view_state::ViewState;

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// Serialise tests that mutate process environment variables.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
