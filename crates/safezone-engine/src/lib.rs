//! # safezone-engine
//!
//! The surface consumed by the web layer. Reads snapshots from an injected
//! point store, runs the pure engines over them, and routes zone-entry and
//! announcement traffic through the alert dispatcher.

pub mod engine;
pub mod results;

pub use engine::SafeZoneEngine;
pub use results::{LocationAlert, ZoneCheck};
