use proptest::prelude::*;
use safezone_core::risk::{RiskInputs, RiskTable};

proptest! {
    #[test]
    fn grid_level_monotonic_in_count(count in 1u64..200, extra in 0u64..50, avg in 1.0f64..=3.0) {
        let table = RiskTable::grid();
        let lo = table.classify(RiskInputs::from_counts(count, avg, 3));
        let hi = table.classify(RiskInputs::from_counts(count + extra, avg, 3));
        prop_assert!(hi >= lo, "{:?} < {:?}", hi, lo);
    }

    #[test]
    fn grid_level_monotonic_in_avg_severity(count in 1u64..200, a in 1.0f64..=3.0, b in 1.0f64..=3.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let table = RiskTable::grid();
        let lo = table.classify(RiskInputs::from_counts(count, low, 3));
        let hi = table.classify(RiskInputs::from_counts(count, high, 3));
        prop_assert!(hi >= lo);
    }

    #[test]
    fn cluster_level_monotonic_in_count(count in 1u64..200, extra in 0u64..50, avg in 1.0f64..=3.0, max in 1u8..=3) {
        let table = RiskTable::cluster();
        let lo = table.classify(RiskInputs::from_counts(count, avg, max));
        let hi = table.classify(RiskInputs::from_counts(count + extra, avg, max));
        prop_assert!(hi >= lo);
    }

    #[test]
    fn zone_level_monotonic_in_case_count(a in 0u64..1_000, b in 0u64..1_000) {
        let table = RiskTable::zone_case_count();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(table.classify(RiskInputs::case_count(high)) >= table.classify(RiskInputs::case_count(low)));
    }
}
