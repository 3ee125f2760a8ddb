use std::cmp::Ordering;

use safezone_core::geo::haversine_km;
use safezone_core::models::{GeoPoint, RiskLevel, Zone};
use safezone_core::risk::{RiskInputs, RiskTable};

/// Zone level from a case count: ≥100 critical, ≥50 high, ≥20 medium.
pub fn classify_by_case_count(case_count: u32) -> RiskLevel {
    RiskTable::zone_case_count().classify(RiskInputs::case_count(u64::from(case_count)))
}

/// Risk descending, then case count descending.
fn by_priority(a: &Zone, b: &Zone) -> Ordering {
    b.risk_level
        .cmp(&a.risk_level)
        .then_with(|| b.case_count.cmp(&a.case_count))
}

#[derive(Debug, Clone)]
pub struct ZoneMatcher {
    table: RiskTable,
}

impl Default for ZoneMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneMatcher {
    pub fn new() -> Self {
        Self {
            table: RiskTable::zone_case_count(),
        }
    }

    pub fn with_table(table: RiskTable) -> Self {
        Self { table }
    }

    /// Whether `point` is inside `zone`. The boundary counts as inside and
    /// inactive zones never contain anything.
    pub fn contains(zone: &Zone, point: GeoPoint) -> bool {
        zone.is_active && haversine_km(point, zone.center) <= zone.radius_km
    }

    /// Active zones containing `point`, highest risk first.
    pub fn find_containing(&self, point: GeoPoint, zones: &[Zone]) -> Vec<Zone> {
        let mut hits: Vec<Zone> = zones
            .iter()
            .filter(|z| Self::contains(z, point))
            .cloned()
            .collect();
        hits.sort_by(by_priority);
        tracing::trace!(
            lat = point.lat,
            lon = point.lon,
            candidates = zones.len(),
            matched = hits.len(),
            "zone containment checked"
        );
        hits
    }

    /// Active zones whose center lies within `radius_km` of `point`,
    /// ordered like [`find_containing`](Self::find_containing).
    pub fn find_nearby(&self, point: GeoPoint, zones: &[Zone], radius_km: f64) -> Vec<Zone> {
        let mut hits: Vec<Zone> = zones
            .iter()
            .filter(|z| z.is_active && haversine_km(point, z.center) <= radius_km)
            .cloned()
            .collect();
        hits.sort_by(by_priority);
        hits
    }

    pub fn classify(&self, case_count: u32) -> RiskLevel {
        self.table
            .classify(RiskInputs::case_count(u64::from(case_count)))
    }

    /// Copy of `zone` with a new case count and the level derived from it.
    /// The caller persists the result.
    pub fn recount(&self, zone: &Zone, case_count: u32) -> Zone {
        Zone {
            case_count,
            risk_level: self.classify(case_count),
            ..zone.clone()
        }
    }
}
