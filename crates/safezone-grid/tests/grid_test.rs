use chrono::{Duration, TimeZone, Utc};
use safezone_core::models::{GeoPoint, RiskLevel};
use safezone_grid::{stats, GridAggregator};
use test_fixtures::generators::{base_time, case_at, daily_series, lattice};
use test_fixtures::load_case_fixture;

#[test]
fn twelve_points_severity_two_in_one_cell_is_critical() {
    let points = lattice("p", GeoPoint::new(10.71, 106.71), 12, 0.005, 2);
    let result = GridAggregator::new().aggregate(&points, 0.1, None).unwrap();

    assert_eq!(result.total_cells, 1);
    let cell = &result.cells[0];
    assert_eq!(cell.count, 12);
    assert_eq!(cell.total_severity, 24);
    assert_eq!(cell.avg_severity, 2.0);
    assert_eq!(cell.risk_score, 24.0);
    assert_eq!(cell.risk_level, RiskLevel::Critical);
    assert_eq!(result.stats.critical_cells, 1);
    assert_eq!(result.stats.total_cases, 12);
}

#[test]
fn avg_severity_is_rounded_to_two_decimals() {
    let points = vec![
        case_at("a", 10.01, 106.01, 1),
        case_at("b", 10.02, 106.02, 1),
        case_at("c", 10.03, 106.03, 3),
    ];
    let result = GridAggregator::new().aggregate(&points, 0.1, None).unwrap();
    let cell = &result.cells[0];
    assert_eq!(cell.avg_severity, 1.67);
    assert_eq!(cell.max_severity, 3);
    // 3 × 1.67 = 5.01 → medium (≥3), not high (<8, count<5)
    assert_eq!(cell.risk_level, RiskLevel::Medium);
}

#[test]
fn fixture_produces_expected_cells() {
    let fixture = load_case_fixture("hcmc_outbreak");
    let result = GridAggregator::new()
        .aggregate(&fixture.points, 0.1, None)
        .unwrap();

    assert_eq!(result.stats.total_cases, 16);
    // hotspot first, ordered by count
    let top = &result.cells[0];
    assert_eq!(top.count, 12);
    assert_eq!(top.risk_level, RiskLevel::Critical);
    assert_eq!(top.diseases, vec!["dengue".to_string(), "hfmd".to_string()]);
    assert_eq!(top.disease_breakdown.get("dengue"), Some(&8));
    assert_eq!(top.disease_breakdown.get("hfmd"), Some(&4));
    assert_eq!(
        top.statuses,
        vec!["confirmed".to_string(), "suspected".to_string()]
    );

    let per_level: usize = RiskLevel::ALL
        .iter()
        .map(|l| result.stats.cells_at(*l))
        .sum();
    assert_eq!(per_level, result.total_cells);
}

#[test]
fn cells_sorted_by_count_descending() {
    let fixture = load_case_fixture("hcmc_outbreak");
    let result = GridAggregator::new()
        .aggregate(&fixture.points, 0.01, None)
        .unwrap();
    assert!(result
        .cells
        .windows(2)
        .all(|w| w[0].count >= w[1].count));
}

#[test]
fn case_stats_summary_and_rankings() {
    let fixture = load_case_fixture("hcmc_outbreak");
    let now = Utc.with_ymd_and_hms(2024, 5, 20, 0, 0, 0).unwrap();
    let s = stats::summarize(&fixture.points, now);

    assert_eq!(s.summary.total_cases, 16);
    assert_eq!(s.summary.high_severity, 1);
    assert_eq!(s.summary.medium_severity, 12);
    assert_eq!(s.summary.low_severity, 3);
    assert_eq!(
        s.summary.min_time,
        Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
    );

    assert_eq!(s.by_disease[0].label, "dengue");
    assert_eq!(s.by_disease[0].total, 9);
    assert!(s.by_status.windows(2).all(|w| w[0].total >= w[1].total));
    assert!(s.by_day.windows(2).all(|w| w[0].date < w[1].date));
    assert_eq!(s.by_month.len(), 3);
    assert_eq!(s.by_month.iter().map(|d| d.total).sum::<u64>(), 16);
}

#[test]
fn weekly_trend_keeps_twelve_most_recent_weeks() {
    let points = daily_series("d", 200, "dengue");
    let s = stats::summarize(&points, base_time());
    assert_eq!(s.by_week.len(), 12);
    assert!(s.by_week.windows(2).all(|w| w[0].date < w[1].date));
    let newest = s.by_week.last().unwrap().date;
    assert!(newest <= base_time().date_naive());
    assert!(base_time().date_naive() - newest < Duration::days(7));
}

#[test]
fn comparison_splits_thirty_day_periods() {
    let points = daily_series("d", 90, "dengue");
    let s = stats::summarize(&points, base_time());
    // days 0..=30 fall in the current window, 31..=60 in the previous one
    assert_eq!(s.comparison.current_period, 31);
    assert_eq!(s.comparison.previous_period, 30);
}
