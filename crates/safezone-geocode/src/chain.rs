//! Fallback chain for reverse geocoding.
//!
//! Chain: local zone → external geocoder → raw coordinates.
//! Fragments are merged in stage order; an earlier stage's field wins.

use chrono::Utc;
use tracing::warn;

use safezone_core::models::{DegradationEvent, GeoPoint, GeocodeFragment, ReverseGeocodeResult};
use safezone_core::traits::IGeocoder;
use safezone_observability::events;

/// `"{lat:.6}, {lon:.6}"`.
pub fn coordinate_label(point: GeoPoint) -> String {
    format!("{:.6}, {:.6}", point.lat, point.lon)
}

fn fill(slot: &mut Option<String>, value: Option<String>) {
    if slot.is_none() {
        *slot = value;
    }
}

fn merge(into: &mut GeocodeFragment, from: GeocodeFragment) {
    fill(&mut into.commune, from.commune);
    fill(&mut into.district, from.district);
    fill(&mut into.province, from.province);
    fill(&mut into.display_name, from.display_name);
    fill(&mut into.zone_id, from.zone_id);
}

/// One lookup's answer plus the stage failures it fell through.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeOutcome {
    pub result: ReverseGeocodeResult,
    pub degradations: Vec<DegradationEvent>,
}

pub struct GeocodeChain {
    stages: Vec<Box<dyn IGeocoder>>,
}

impl Default for GeocodeChain {
    fn default() -> Self {
        Self::new()
    }
}

impl GeocodeChain {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Add a stage to the end of the chain.
    pub fn push(&mut self, stage: Box<dyn IGeocoder>) {
        self.stages.push(stage);
    }

    /// Resolve `point`. Never fails.
    pub fn reverse(&self, point: GeoPoint) -> ReverseGeocodeResult {
        self.resolve(point).result
    }

    /// Resolve `point`, returning the degradations hit by this call only.
    pub fn resolve(&self, point: GeoPoint) -> GeocodeOutcome {
        let mut merged = GeocodeFragment::default();
        let mut degradations = Vec::new();

        for (i, stage) in self.stages.iter().enumerate() {
            match stage.reverse(point) {
                Ok(Some(fragment)) => merge(&mut merged, fragment),
                Ok(None) => {}
                Err(e) => {
                    let fallback = self
                        .stages
                        .get(i + 1)
                        .map(|s| s.name())
                        .unwrap_or("coordinates");
                    warn!(
                        provider = stage.name(),
                        error = %e,
                        "geocoder stage failed, trying next in chain"
                    );
                    events::degradation_triggered("geocode", stage.name(), fallback);
                    degradations.push(DegradationEvent {
                        component: "geocode".to_string(),
                        failure: format!("{}: {e}", stage.name()),
                        fallback_used: fallback.to_string(),
                        timestamp: Utc::now(),
                    });
                }
            }
        }

        let parts: Vec<&str> = [&merged.commune, &merged.district, &merged.province]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
            .collect();

        let address = if !parts.is_empty() {
            parts.join(", ")
        } else if let Some(ref name) = merged.display_name {
            name.clone()
        } else {
            coordinate_label(point)
        };

        GeocodeOutcome {
            result: ReverseGeocodeResult {
                address,
                commune: merged.commune,
                district: merged.district,
                province: merged.province,
                zone_id: merged.zone_id,
            },
            degradations,
        }
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}
