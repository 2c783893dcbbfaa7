//! podscope-core — schema-driven grid layer for pod observations.
//!
//! Provides:
//! - `storage` — pod and observation models
//! - `config` — grid sizing constants and `GridConfig`
//! - `fmt` — shared formatting helpers (timestamps, measurements, text fitting)
//! - `view` — column layout, cell resolver, view state, viewport and window
//!
//! With `provider` feature (default):
//! - `provider` — pod data source abstraction (file, memory)

pub mod config;
pub mod fmt;
pub mod storage;
pub mod view;

#[cfg(feature = "provider")]
pub mod provider;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
