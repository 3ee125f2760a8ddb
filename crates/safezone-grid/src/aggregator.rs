use std::collections::{BTreeMap, BTreeSet, HashMap};

use safezone_core::errors::{SafeZoneError, SafeZoneResult};
use safezone_core::geo::round2;
use safezone_core::models::{Bounds, CasePoint, GridCell, GridResult, GridStats};
use safezone_core::risk::{RiskInputs, RiskTable};
use safezone_core::RiskLevel;

/// Per-cell accumulator.
#[derive(Default)]
struct CellAcc {
    count: u32,
    total_severity: u32,
    max_severity: u8,
    diseases: BTreeSet<String>,
    statuses: BTreeSet<String>,
    disease_breakdown: BTreeMap<String, u32>,
}

impl CellAcc {
    fn add(&mut self, point: &CasePoint) {
        let sev = point.severity.value();
        self.count += 1;
        self.total_severity += u32::from(sev);
        self.max_severity = self.max_severity.max(sev);
        self.diseases.insert(point.disease_type.clone());
        self.statuses.insert(point.status.clone());
        *self
            .disease_breakdown
            .entry(point.disease_type.clone())
            .or_insert(0) += 1;
    }
}

/// Grid density aggregator. Stateless apart from its risk table.
#[derive(Debug, Clone)]
pub struct GridAggregator {
    table: RiskTable,
}

impl Default for GridAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl GridAggregator {
    pub fn new() -> Self {
        Self {
            table: RiskTable::grid(),
        }
    }

    /// Use a custom threshold table.
    pub fn with_table(table: RiskTable) -> Self {
        Self { table }
    }

    /// Cell index of a coordinate: `(floor(lon / size), floor(lat / size))`.
    pub fn cell_index(lat: f64, lon: f64, cell_size_deg: f64) -> (i64, i64) {
        (
            (lon / cell_size_deg).floor() as i64,
            (lat / cell_size_deg).floor() as i64,
        )
    }

    /// Aggregate `points` into cells of `cell_size_deg`. When `bounds` is set,
    /// points outside it are dropped first.
    ///
    /// Cells are ordered by count descending, then by `(gx, gy)`.
    pub fn aggregate(
        &self,
        points: &[CasePoint],
        cell_size_deg: f64,
        bounds: Option<Bounds>,
    ) -> SafeZoneResult<GridResult> {
        if !cell_size_deg.is_finite() || cell_size_deg <= 0.0 {
            return Err(SafeZoneError::invalid_parameter(
                "cell_size_deg",
                format!("must be a positive number of degrees, got {cell_size_deg}"),
            ));
        }

        let mut cells: HashMap<(i64, i64), CellAcc> = HashMap::new();
        for point in points {
            if let Some(b) = bounds {
                if !b.contains(point.location()) {
                    continue;
                }
            }
            let key = Self::cell_index(point.lat, point.lon, cell_size_deg);
            cells.entry(key).or_default().add(point);
        }

        let mut out: Vec<GridCell> = cells
            .into_iter()
            .map(|((gx, gy), acc)| self.finish_cell(gx, gy, cell_size_deg, acc))
            .collect();
        out.sort_by(|a, b| b.count.cmp(&a.count).then((a.gx, a.gy).cmp(&(b.gx, b.gy))));

        let mut stats = GridStats::default();
        for cell in &out {
            stats.total_cases += u64::from(cell.count);
            match cell.risk_level {
                RiskLevel::Critical => stats.critical_cells += 1,
                RiskLevel::High => stats.high_cells += 1,
                RiskLevel::Medium => stats.medium_cells += 1,
                RiskLevel::Low => stats.low_cells += 1,
            }
        }

        tracing::debug!(
            cell_size_deg,
            input_points = points.len(),
            cells = out.len(),
            total_cases = stats.total_cases,
            "grid aggregated"
        );

        Ok(GridResult {
            grid_size: cell_size_deg,
            total_cells: out.len(),
            cells: out,
            stats,
        })
    }

    fn finish_cell(&self, gx: i64, gy: i64, size: f64, acc: CellAcc) -> GridCell {
        // count is at least 1 for every materialized cell
        let avg_severity = round2(f64::from(acc.total_severity) / f64::from(acc.count));
        let inputs = RiskInputs::from_counts(u64::from(acc.count), avg_severity, acc.max_severity);
        let west = gx as f64 * size;
        let south = gy as f64 * size;
        GridCell {
            gx,
            gy,
            bounds: Bounds::new(south, west, south + size, west + size),
            count: acc.count,
            total_severity: acc.total_severity,
            avg_severity,
            max_severity: acc.max_severity,
            diseases: acc.diseases.into_iter().collect(),
            statuses: acc.statuses.into_iter().collect(),
            disease_breakdown: acc.disease_breakdown,
            risk_score: inputs.score,
            risk_level: self.table.classify(inputs),
        }
    }
}
