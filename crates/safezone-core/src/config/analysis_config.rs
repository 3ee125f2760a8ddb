use serde::{Deserialize, Serialize};

use super::defaults;

/// Grid aggregation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Cell edge length in degrees when the caller gives none.
    pub default_cell_size_deg: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_cell_size_deg: defaults::DEFAULT_GRID_CELL_SIZE_DEG,
        }
    }
}

/// Clustering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// Neighbour distance in degrees when the caller gives none.
    pub default_eps_deg: f64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            default_eps_deg: defaults::DEFAULT_CLUSTER_EPS_DEG,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZonesConfig {
    pub nearby_default_radius_km: f64,
}

impl Default for ZonesConfig {
    fn default() -> Self {
        Self {
            nearby_default_radius_km: defaults::DEFAULT_NEARBY_RADIUS_KM,
        }
    }
}
