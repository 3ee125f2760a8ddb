use proptest::prelude::*;
use safezone_core::geo::haversine_km;
use safezone_core::models::{GeoPoint, RiskLevel};
use safezone_zones::{classify_by_case_count, ZoneMatcher};
use test_fixtures::generators::zone;

proptest! {
    #[test]
    fn containment_agrees_with_distance(
        lat in 8.0f64..23.0, lon in 102.0f64..110.0,
        dlat in -0.2f64..0.2, dlon in -0.2f64..0.2,
        radius in 0.1f64..30.0,
    ) {
        let center = GeoPoint::new(lat, lon);
        let p = GeoPoint::new(lat + dlat, lon + dlon);
        let z = zone("z", center, radius, RiskLevel::Low, 0);
        prop_assert_eq!(ZoneMatcher::contains(&z, p), haversine_km(p, center) <= radius);
    }

    #[test]
    fn results_are_sorted_by_priority(counts in proptest::collection::vec(0u32..200, 0..20)) {
        let c = GeoPoint::new(10.0, 106.0);
        let zones: Vec<_> = counts
            .iter()
            .enumerate()
            .map(|(i, n)| zone(&i.to_string(), c, 1.0, classify_by_case_count(*n), *n))
            .collect();
        let hits = ZoneMatcher::new().find_containing(c, &zones);
        prop_assert_eq!(hits.len(), zones.len());
        for w in hits.windows(2) {
            prop_assert!(
                w[0].risk_level > w[1].risk_level
                    || (w[0].risk_level == w[1].risk_level && w[0].case_count >= w[1].case_count)
            );
        }
    }
}
