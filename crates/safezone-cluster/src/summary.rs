use std::collections::BTreeSet;

use safezone_core::geo::round2;
use safezone_core::models::{CasePoint, Cluster, ClusterSeverity, GeoPoint, TimeRange};
use safezone_core::risk::{RiskInputs, RiskTable};

/// Build a cluster from its (non-empty) member set.
pub(crate) fn summarize(id: usize, members: &[&CasePoint], table: &RiskTable) -> Option<Cluster> {
    let first = members.first()?;
    let count = members.len();

    let mut total: u32 = 0;
    let mut max: u8 = 0;
    let (mut sum_lat, mut sum_lon) = (0.0, 0.0);
    let (mut earliest, mut latest) = (first.reported_time, first.reported_time);
    let mut diseases = BTreeSet::new();
    let mut statuses = BTreeSet::new();

    for p in members {
        let sev = p.severity.value();
        total += u32::from(sev);
        max = max.max(sev);
        sum_lat += p.lat;
        sum_lon += p.lon;
        earliest = earliest.min(p.reported_time);
        latest = latest.max(p.reported_time);
        diseases.insert(p.disease_type.clone());
        statuses.insert(p.status.clone());
    }

    let average = round2(f64::from(total) / count as f64);
    let combined = table.classify(RiskInputs::from_counts(count as u64, average, max));

    let mut ids: Vec<String> = members.iter().map(|p| p.id.clone()).collect();
    ids.sort();

    Some(Cluster {
        id,
        count: count as u32,
        center: GeoPoint::new(sum_lat / count as f64, sum_lon / count as f64),
        severity: ClusterSeverity {
            total,
            average,
            max,
            combined,
        },
        diseases: diseases.into_iter().collect(),
        statuses: statuses.into_iter().collect(),
        time_range: TimeRange { earliest, latest },
        members: ids,
    })
}
