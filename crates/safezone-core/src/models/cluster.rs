use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::geo_point::GeoPoint;
use super::risk_level::RiskLevel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSeverity {
    pub total: u32,
    /// Rounded to 2 decimals.
    pub average: f64,
    pub max: u8,
    /// Combined tier: `Low`, `Medium` or `High`.
    pub combined: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub earliest: DateTime<Utc>,
    pub latest: DateTime<Utc>,
}

/// A connected component of cases under the eps-neighbour relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub id: usize,
    pub count: u32,
    /// Arithmetic mean of member coordinates.
    pub center: GeoPoint,
    pub severity: ClusterSeverity,
    pub diseases: Vec<String>,
    pub statuses: Vec<String>,
    pub time_range: TimeRange,
    /// Member case ids, sorted.
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterResult {
    pub cluster_distance: f64,
    pub total_clusters: usize,
    pub total_cases: u64,
    /// Sorted by count descending.
    pub clusters: Vec<Cluster>,
}

impl ClusterResult {
    pub fn empty(cluster_distance: f64) -> Self {
        Self {
            cluster_distance,
            total_clusters: 0,
            total_cases: 0,
            clusters: Vec::new(),
        }
    }
}
