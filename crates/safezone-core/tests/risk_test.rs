use safezone_core::models::RiskLevel;
use safezone_core::risk::*;

#[test]
fn case_count_boundary_table() {
    let table = RiskTable::zone_case_count();
    let cases = [
        (100, RiskLevel::Critical),
        (99, RiskLevel::High),
        (50, RiskLevel::High),
        (49, RiskLevel::Medium),
        (20, RiskLevel::Medium),
        (19, RiskLevel::Low),
        (0, RiskLevel::Low),
    ];
    for (count, expected) in cases {
        assert_eq!(
            table.classify(RiskInputs::case_count(count)),
            expected,
            "case count {count}"
        );
    }
}

#[test]
fn grid_twelve_cases_severity_two_is_critical() {
    let inputs = RiskInputs::from_counts(12, 2.0, 2);
    assert_eq!(inputs.score, 24.0);
    assert_eq!(RiskTable::grid().classify(inputs), RiskLevel::Critical);
}

#[test]
fn grid_threshold_edges() {
    let grid = RiskTable::grid();
    // count 10 alone reaches critical
    assert_eq!(grid.classify(RiskInputs::from_counts(10, 1.0, 1)), RiskLevel::Critical);
    // score 15 alone reaches critical
    assert_eq!(grid.classify(RiskInputs::from_counts(5, 3.0, 3)), RiskLevel::Critical);
    assert_eq!(grid.classify(RiskInputs::from_counts(4, 2.0, 2)), RiskLevel::High);
    assert_eq!(grid.classify(RiskInputs::from_counts(5, 1.0, 1)), RiskLevel::High);
    assert_eq!(grid.classify(RiskInputs::from_counts(1, 3.0, 3)), RiskLevel::Medium);
    assert_eq!(grid.classify(RiskInputs::from_counts(2, 1.0, 1)), RiskLevel::Medium);
    assert_eq!(grid.classify(RiskInputs::from_counts(1, 2.0, 2)), RiskLevel::Low);
}

#[test]
fn cluster_tiers() {
    let cluster = RiskTable::cluster();
    // one severity-3 member is enough for high
    assert_eq!(cluster.classify(RiskInputs::from_counts(1, 3.0, 3)), RiskLevel::High);
    assert_eq!(cluster.classify(RiskInputs::from_counts(8, 2.0, 2)), RiskLevel::High);
    assert_eq!(cluster.classify(RiskInputs::from_counts(1, 2.0, 2)), RiskLevel::Medium);
    assert_eq!(cluster.classify(RiskInputs::from_counts(5, 1.0, 1)), RiskLevel::Medium);
    assert_eq!(cluster.classify(RiskInputs::from_counts(4, 1.0, 1)), RiskLevel::Low);
}

#[test]
fn custom_table_round_trips_through_json() {
    let table = RiskTable::new(
        vec![RiskThreshold::new(RiskLevel::High).count(3)],
        RiskLevel::Medium,
    );
    let json = serde_json::to_string(&table).unwrap();
    let back: RiskTable = serde_json::from_str(&json).unwrap();
    assert_eq!(back.classify(RiskInputs::case_count(3)), RiskLevel::High);
    assert_eq!(back.classify(RiskInputs::case_count(2)), RiskLevel::Medium);
}

#[test]
fn unordered_table_is_detected() {
    let table = RiskTable::new(
        vec![
            RiskThreshold::new(RiskLevel::Medium).count(2),
            RiskThreshold::new(RiskLevel::High).count(5),
        ],
        RiskLevel::Low,
    );
    assert!(!table.is_ordered());
}
