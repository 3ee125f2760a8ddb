use proptest::prelude::*;
use safezone_grid::GridAggregator;
use test_fixtures::generators::arb_case_points;

proptest! {
    #[test]
    fn every_point_lands_in_exactly_one_cell(
        points in arb_case_points(200),
        size in prop_oneof![Just(0.01f64), Just(0.05), Just(0.1), Just(0.5), Just(1.0)],
    ) {
        let result = GridAggregator::new().aggregate(&points, size, None).unwrap();
        let total: u64 = result.cells.iter().map(|c| u64::from(c.count)).sum();
        prop_assert_eq!(total, points.len() as u64);
        prop_assert_eq!(result.stats.total_cases, points.len() as u64);

        for p in &points {
            let idx = GridAggregator::cell_index(p.lat, p.lon, size);
            let hits = result.cells.iter().filter(|c| (c.gx, c.gy) == idx).count();
            prop_assert_eq!(hits, 1);
        }
    }

    #[test]
    fn cell_invariants_hold(points in arb_case_points(100)) {
        let result = GridAggregator::new().aggregate(&points, 0.1, None).unwrap();
        for cell in &result.cells {
            prop_assert!(cell.count >= 1);
            prop_assert!((1..=3).contains(&cell.max_severity));
            prop_assert!(cell.avg_severity >= 1.0 && cell.avg_severity <= 3.0);
            let breakdown: u32 = cell.disease_breakdown.values().sum();
            prop_assert_eq!(breakdown, cell.count);
        }
    }
}
