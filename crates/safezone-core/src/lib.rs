//! # safezone-core
//!
//! Foundation crate for the SafeZone epidemic-zone engine.
//! Defines the data model, risk-threshold tables, geo math, collaborator
//! traits, errors, config, and constants. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod geo;
pub mod models;
pub mod risk;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SafeZoneConfig;
pub use errors::{SafeZoneError, SafeZoneResult};
pub use models::{CasePoint, GeoPoint, RiskLevel, Severity, Zone};
pub use risk::{RiskInputs, RiskTable, RiskThreshold};
