use std::collections::BTreeSet;

use proptest::prelude::*;
use safezone_cluster::ClusterEngine;
use safezone_core::geo::planar_distance_deg;
use safezone_core::models::ClusterResult;
use test_fixtures::generators::arb_case_points;

fn memberships(result: &ClusterResult) -> BTreeSet<Vec<String>> {
    result.clusters.iter().map(|c| c.members.clone()).collect()
}

proptest! {
    #[test]
    fn membership_invariant_under_permutation(
        (points, shuffled) in arb_case_points(120).prop_flat_map(|pts| {
            let shuffled = Just(pts.clone()).prop_shuffle();
            (Just(pts), shuffled)
        }),
        eps in prop_oneof![Just(0.02f64), Just(0.05), Just(0.2)],
    ) {
        let engine = ClusterEngine::new();
        let a = engine.cluster(&points, eps).unwrap();
        let b = engine.cluster(&shuffled, eps).unwrap();
        prop_assert_eq!(memberships(&a), memberships(&b));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn every_point_in_exactly_one_cluster(points in arb_case_points(150)) {
        let result = ClusterEngine::new().cluster(&points, 0.05).unwrap();
        prop_assert_eq!(result.total_cases, points.len() as u64);
        let mut seen = BTreeSet::new();
        for c in &result.clusters {
            for id in &c.members {
                prop_assert!(seen.insert(id.clone()), "{} in two clusters", id);
            }
        }
        prop_assert_eq!(seen.len(), points.len());
    }

    #[test]
    fn eps_neighbours_share_a_cluster(points in arb_case_points(80)) {
        let eps = 0.1;
        let result = ClusterEngine::new().cluster(&points, eps).unwrap();
        let cluster_of = |id: &str| result.clusters.iter().position(|c| c.members.iter().any(|m| m == id));
        for a in &points {
            for b in &points {
                if planar_distance_deg(a.location(), b.location()) <= eps {
                    prop_assert_eq!(cluster_of(&a.id), cluster_of(&b.id));
                }
            }
        }
    }
}
