use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::geo_point::Bounds;
use super::risk_level::RiskLevel;

/// One fixed-size bucket of the density grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    /// Column index, `floor(lon / size)`.
    pub gx: i64,
    /// Row index, `floor(lat / size)`.
    pub gy: i64,
    pub bounds: Bounds,
    pub count: u32,
    pub total_severity: u32,
    /// Rounded to 2 decimals.
    pub avg_severity: f64,
    pub max_severity: u8,
    pub diseases: Vec<String>,
    pub statuses: Vec<String>,
    /// Case count per disease type.
    pub disease_breakdown: BTreeMap<String, u32>,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
}

/// Per-level cell counts plus the total case count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridStats {
    pub total_cases: u64,
    pub critical_cells: usize,
    pub high_cells: usize,
    pub medium_cells: usize,
    pub low_cells: usize,
}

impl GridStats {
    /// Number of cells classified at `level`.
    pub fn cells_at(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Critical => self.critical_cells,
            RiskLevel::High => self.high_cells,
            RiskLevel::Medium => self.medium_cells,
            RiskLevel::Low => self.low_cells,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridResult {
    pub grid_size: f64,
    pub total_cells: usize,
    pub cells: Vec<GridCell>,
    pub stats: GridStats,
}

impl GridResult {
    pub fn empty(grid_size: f64) -> Self {
        Self {
            grid_size,
            total_cells: 0,
            cells: Vec::new(),
            stats: GridStats::default(),
        }
    }
}
