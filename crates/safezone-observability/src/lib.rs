//! # safezone-observability
//!
//! Tracing subscriber setup, the structured log events every other crate
//! emits, and a tracker for fallback-chain degradations.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::{DegradationTracker, RecoveryStatus, TrackedDegradation, DEFAULT_MAX_TRACKED};
pub use tracing_setup::{events, init_from_config, init_tracing, init_tracing_with_filter};
