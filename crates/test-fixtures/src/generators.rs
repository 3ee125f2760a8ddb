//! Point builders and proptest strategies.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use safezone_core::models::{CasePoint, GeoPoint, RiskLevel, Severity, Zone};

/// Fixed reference instant so generated data is reproducible.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

pub fn case_at(id: &str, lat: f64, lon: f64, severity: u8) -> CasePoint {
    CasePoint {
        id: id.to_string(),
        disease_type: "dengue".to_string(),
        status: "confirmed".to_string(),
        severity: Severity::new(severity),
        reported_time: base_time(),
        lat,
        lon,
    }
}

/// `n` cases laid on a small square lattice with `step` degrees spacing.
pub fn lattice(prefix: &str, origin: GeoPoint, n: usize, step: f64, severity: u8) -> Vec<CasePoint> {
    let side = (n as f64).sqrt().ceil().max(1.0) as usize;
    (0..n)
        .map(|i| {
            let (row, col) = (i / side, i % side);
            case_at(
                &format!("{prefix}-{i}"),
                origin.lat + row as f64 * step,
                origin.lon + col as f64 * step,
                severity,
            )
        })
        .collect()
}

/// `n` cases spread one day apart going back from `base_time()`.
pub fn daily_series(prefix: &str, n: usize, disease: &str) -> Vec<CasePoint> {
    (0..n)
        .map(|i| {
            let mut p = case_at(&format!("{prefix}-{i}"), 10.77, 106.70, 1);
            p.disease_type = disease.to_string();
            p.reported_time = base_time() - Duration::days(i as i64);
            p
        })
        .collect()
}

pub fn zone(id: &str, center: GeoPoint, radius_km: f64, risk: RiskLevel, case_count: u32) -> Zone {
    Zone {
        id: id.to_string(),
        name: format!("Zone {id}"),
        disease_type: "dengue".to_string(),
        center,
        radius_km,
        risk_level: risk,
        case_count,
        description: None,
        is_active: true,
        start_date: None,
        end_date: None,
    }
}

/// Arbitrary case point inside a 2°×2° box around Ho Chi Minh City.
pub fn arb_case_point() -> impl Strategy<Value = CasePoint> {
    (
        "[a-z0-9]{8}",
        prop_oneof![Just("dengue"), Just("covid"), Just("hfmd")],
        prop_oneof![Just("suspected"), Just("confirmed"), Just("recovered")],
        1u8..=3,
        0i64..(90 * 24),
        9.8f64..11.8,
        105.7f64..107.7,
    )
        .prop_map(|(id, disease, status, sev, hours, lat, lon)| CasePoint {
            id,
            disease_type: disease.to_string(),
            status: status.to_string(),
            severity: Severity::new(sev),
            reported_time: base_time() - Duration::hours(hours),
            lat,
            lon,
        })
}

/// Vector of arbitrary points with unique ids.
pub fn arb_case_points(max: usize) -> impl Strategy<Value = Vec<CasePoint>> {
    proptest::collection::vec(arb_case_point(), 0..max).prop_map(|mut pts| {
        for (i, p) in pts.iter_mut().enumerate() {
            p.id = format!("{}-{i}", p.id);
        }
        pts
    })
}
