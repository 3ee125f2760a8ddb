use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use safezone_core::models::{RiskLevel, Zone};

/// Zone totals. Level breakdown and case totals cover active zones only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneStats {
    pub total: usize,
    pub active: usize,
    /// Every level is present, zero when unused.
    pub by_risk_level: BTreeMap<RiskLevel, usize>,
    pub total_cases: u64,
}

pub fn zone_stats(zones: &[Zone]) -> ZoneStats {
    let mut by_risk_level: BTreeMap<RiskLevel, usize> =
        RiskLevel::ALL.iter().map(|l| (*l, 0)).collect();
    let mut active = 0;
    let mut total_cases = 0u64;

    for z in zones.iter().filter(|z| z.is_active) {
        active += 1;
        total_cases += u64::from(z.case_count);
        *by_risk_level.entry(z.risk_level).or_insert(0) += 1;
    }

    ZoneStats {
        total: zones.len(),
        active,
        by_risk_level,
        total_cases,
    }
}
