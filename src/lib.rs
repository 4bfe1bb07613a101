//! Curio client library: view-state store, service sources and configuration.
//!
//! The binary in `main.rs` is a thin CLI over [`store::ViewStateStore`];
//! integration tests drive the same public API with a scripted fetcher.

pub mod config;
pub mod sources;
pub mod state;
pub mod store;
pub mod util;
