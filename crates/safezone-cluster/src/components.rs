//! Connected components under the eps-neighbour relation.
//!
//! Points are hashed into square buckets of side `eps`; any two points within
//! `eps` of each other are in the same or adjacent buckets, so each point is
//! only compared against its 3×3 bucket neighbourhood.

use std::collections::HashMap;

use petgraph::unionfind::UnionFind;

use safezone_core::geo::planar_distance_deg;
use safezone_core::models::GeoPoint;

/// Bucket coordinates saturate at the `i64` range for very small `eps`;
/// clamping keeps neighbours in adjacent buckets.
fn bucket(p: GeoPoint, eps: f64) -> (i64, i64) {
    ((p.lon / eps).floor() as i64, (p.lat / eps).floor() as i64)
}

/// Component label per input index. Labels are union-find representatives,
/// not dense ids.
pub fn label_components(points: &[GeoPoint], eps: f64) -> Vec<usize> {
    let mut uf = UnionFind::<usize>::new(points.len());

    let mut buckets: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
    for (i, p) in points.iter().enumerate() {
        buckets.entry(bucket(*p, eps)).or_default().push(i);
    }

    for (i, p) in points.iter().enumerate() {
        let (bx, by) = bucket(*p, eps);
        for dx in -1..=1 {
            for dy in -1..=1 {
                let Some(members) = buckets.get(&(bx.saturating_add(dx), by.saturating_add(dy))) else {
                    continue;
                };
                for &j in members {
                    if j > i && planar_distance_deg(*p, points[j]) <= eps {
                        uf.union(i, j);
                    }
                }
            }
        }
    }

    uf.into_labeling()
}

/// Group input indices by component. Each group is sorted ascending.
pub fn group_components(points: &[GeoPoint], eps: f64) -> Vec<Vec<usize>> {
    let labels = label_components(points, eps);
    let mut groups: HashMap<usize, Vec<usize>> = HashMap::new();
    for (i, label) in labels.into_iter().enumerate() {
        groups.entry(label).or_default().push(i);
    }
    groups.into_values().collect()
}
