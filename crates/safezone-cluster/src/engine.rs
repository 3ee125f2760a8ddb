use safezone_core::errors::{SafeZoneError, SafeZoneResult};
use safezone_core::models::{CasePoint, ClusterResult, GeoPoint};
use safezone_core::risk::RiskTable;

use crate::components::group_components;
use crate::summary::summarize;

/// Connected-component cluster engine. Stateless apart from its tier table.
#[derive(Debug, Clone)]
pub struct ClusterEngine {
    table: RiskTable,
}

impl Default for ClusterEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ClusterEngine {
    pub fn new() -> Self {
        Self {
            table: RiskTable::cluster(),
        }
    }

    pub fn with_table(table: RiskTable) -> Self {
        Self { table }
    }

    /// Cluster `points` with neighbour distance `eps_deg`.
    ///
    /// Clusters are sorted by count descending, ties broken by smallest
    /// member id, and numbered from 0 in that order. The result does not
    /// depend on input order.
    pub fn cluster(&self, points: &[CasePoint], eps_deg: f64) -> SafeZoneResult<ClusterResult> {
        if !eps_deg.is_finite() || eps_deg <= 0.0 {
            return Err(SafeZoneError::invalid_parameter(
                "eps_deg",
                format!("must be a positive number of degrees, got {eps_deg}"),
            ));
        }
        if points.is_empty() {
            return Ok(ClusterResult::empty(eps_deg));
        }

        let coords: Vec<GeoPoint> = points.iter().map(CasePoint::location).collect();
        let mut groups: Vec<Vec<&CasePoint>> = group_components(&coords, eps_deg)
            .into_iter()
            .map(|idx| idx.into_iter().map(|i| &points[i]).collect())
            .collect();

        for g in &mut groups {
            g.sort_by(|a, b| a.id.cmp(&b.id));
        }
        groups.sort_by(|a, b| {
            b.len()
                .cmp(&a.len())
                .then_with(|| a[0].id.cmp(&b[0].id))
        });

        let clusters: Vec<_> = groups
            .iter()
            .enumerate()
            .filter_map(|(id, members)| summarize(id, members, &self.table))
            .collect();

        tracing::debug!(
            eps_deg,
            input_points = points.len(),
            clusters = clusters.len(),
            "clusters computed"
        );

        Ok(ClusterResult {
            cluster_distance: eps_deg,
            total_clusters: clusters.len(),
            total_cases: clusters.iter().map(|c| u64::from(c.count)).sum(),
            clusters,
        })
    }
}
