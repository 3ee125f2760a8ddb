//! Data-driven risk classification.
//!
//! A [`RiskTable`] is an ordered list of thresholds, highest level first.
//! The first row any of whose minimums is met wins; if none matches the
//! table's floor level is returned. Grid cells, clusters and zone case
//! counts all classify through a table instead of inline conditionals.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::models::RiskLevel;

/// Measurements a threshold row is compared against.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RiskInputs {
    pub score: f64,
    pub count: u64,
    pub avg_severity: f64,
    pub max_severity: u8,
}

impl RiskInputs {
    /// Inputs with `score = count × avg_severity`.
    pub fn from_counts(count: u64, avg_severity: f64, max_severity: u8) -> Self {
        Self {
            score: count as f64 * avg_severity,
            count,
            avg_severity,
            max_severity,
        }
    }

    /// Inputs for a plain case count.
    pub fn case_count(count: u64) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }
}

/// One row of a [`RiskTable`]. A row matches when ANY of its set minimums is
/// reached. A row with no minimums never matches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThreshold {
    pub level: RiskLevel,
    #[serde(default)]
    pub min_score: Option<f64>,
    #[serde(default)]
    pub min_count: Option<u64>,
    #[serde(default)]
    pub min_avg_severity: Option<f64>,
    #[serde(default)]
    pub min_max_severity: Option<u8>,
}

impl RiskThreshold {
    pub const fn new(level: RiskLevel) -> Self {
        Self {
            level,
            min_score: None,
            min_count: None,
            min_avg_severity: None,
            min_max_severity: None,
        }
    }

    pub const fn score(mut self, min: f64) -> Self {
        self.min_score = Some(min);
        self
    }

    pub const fn count(mut self, min: u64) -> Self {
        self.min_count = Some(min);
        self
    }

    pub const fn avg_severity(mut self, min: f64) -> Self {
        self.min_avg_severity = Some(min);
        self
    }

    pub const fn max_severity(mut self, min: u8) -> Self {
        self.min_max_severity = Some(min);
        self
    }

    pub fn matches(&self, inputs: &RiskInputs) -> bool {
        self.min_score.is_some_and(|m| inputs.score >= m)
            || self.min_count.is_some_and(|m| inputs.count >= m)
            || self.min_avg_severity.is_some_and(|m| inputs.avg_severity >= m)
            || self.min_max_severity.is_some_and(|m| inputs.max_severity >= m)
    }
}

const GRID_ROWS: &[RiskThreshold] = &[
    RiskThreshold::new(RiskLevel::Critical).score(15.0).count(10),
    RiskThreshold::new(RiskLevel::High).score(8.0).count(5),
    RiskThreshold::new(RiskLevel::Medium).score(3.0).count(2),
];

const CLUSTER_ROWS: &[RiskThreshold] = &[
    RiskThreshold::new(RiskLevel::High).score(15.0).max_severity(3),
    RiskThreshold::new(RiskLevel::Medium).score(5.0).avg_severity(2.0),
];

const ZONE_CASE_COUNT_ROWS: &[RiskThreshold] = &[
    RiskThreshold::new(RiskLevel::Critical).count(100),
    RiskThreshold::new(RiskLevel::High).count(50),
    RiskThreshold::new(RiskLevel::Medium).count(20),
];

/// Ordered threshold table, highest level first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskTable {
    rows: Cow<'static, [RiskThreshold]>,
    floor: RiskLevel,
}

impl RiskTable {
    /// Custom table. Rows are evaluated in the given order.
    pub fn new(rows: Vec<RiskThreshold>, floor: RiskLevel) -> Self {
        Self {
            rows: Cow::Owned(rows),
            floor,
        }
    }

    /// Grid cells: critical ≥15 score or ≥10 cases, high ≥8 or ≥5,
    /// medium ≥3 or ≥2.
    pub fn grid() -> Self {
        Self {
            rows: Cow::Borrowed(GRID_ROWS),
            floor: RiskLevel::Low,
        }
    }

    /// Cluster combined tier: high ≥15 score or a severity-3 member,
    /// medium ≥5 score or average severity ≥2.
    pub fn cluster() -> Self {
        Self {
            rows: Cow::Borrowed(CLUSTER_ROWS),
            floor: RiskLevel::Low,
        }
    }

    /// Zone level from case count: 100 / 50 / 20.
    pub fn zone_case_count() -> Self {
        Self {
            rows: Cow::Borrowed(ZONE_CASE_COUNT_ROWS),
            floor: RiskLevel::Low,
        }
    }

    pub fn rows(&self) -> &[RiskThreshold] {
        &self.rows
    }

    pub fn floor(&self) -> RiskLevel {
        self.floor
    }

    pub fn classify(&self, inputs: RiskInputs) -> RiskLevel {
        self.rows
            .iter()
            .find(|row| row.matches(&inputs))
            .map(|row| row.level)
            .unwrap_or(self.floor)
    }

    /// Whether rows are listed in strictly descending level order above the
    /// floor. Only ordered tables are monotonic in their inputs.
    pub fn is_ordered(&self) -> bool {
        self.rows.windows(2).all(|w| w[0].level > w[1].level)
            && self.rows.last().is_none_or(|r| r.level > self.floor)
    }
}
