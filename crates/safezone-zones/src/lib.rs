//! # safezone-zones
//!
//! Zone containment and risk derivation. Everything here is pure and
//! linear in the number of zones passed in.

pub mod matcher;
pub mod stats;

pub use matcher::{classify_by_case_count, ZoneMatcher};
pub use stats::{zone_stats, ZoneStats};
