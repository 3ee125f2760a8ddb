//! # safezone-geocode
//!
//! Turns a coordinate into a human-readable address. Stages are tried in
//! order and merged; a failing stage is logged as a degradation and never
//! surfaces to the caller. The last resort is the raw coordinate string.

pub mod chain;
pub mod providers;

pub use chain::{coordinate_label, GeocodeChain, GeocodeOutcome};
pub use providers::nominatim::NominatimGeocoder;
pub use providers::zone_lookup::ZoneLookupGeocoder;
