//! Case statistics over a point snapshot.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use safezone_core::constants::{COMPARISON_PERIOD_DAYS, WEEKLY_TREND_WEEKS};
use safezone_core::models::CasePoint;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSummary {
    pub total_cases: u64,
    /// Severity 3.
    pub high_severity: u64,
    pub medium_severity: u64,
    /// Severity 1.
    pub low_severity: u64,
    pub min_time: Option<DateTime<Utc>>,
    pub max_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledCount {
    pub label: String,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedCount {
    /// First day of the bucket.
    pub date: NaiveDate,
    pub total: u64,
}

/// Cases reported in the last 30 days vs the 30 days before.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodComparison {
    pub current_period: u64,
    pub previous_period: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStats {
    pub summary: CaseSummary,
    /// Descending by total.
    pub by_disease: Vec<LabeledCount>,
    /// Descending by total.
    pub by_status: Vec<LabeledCount>,
    pub by_day: Vec<DatedCount>,
    pub by_month: Vec<DatedCount>,
    /// Most recent weeks (Monday start), oldest first.
    pub by_week: Vec<DatedCount>,
    pub comparison: PeriodComparison,
}

/// Summarize `points`. `now` anchors the period comparison.
pub fn summarize(points: &[CasePoint], now: DateTime<Utc>) -> CaseStats {
    let mut summary = CaseSummary::default();
    let mut by_disease: HashMap<&str, u64> = HashMap::new();
    let mut by_status: HashMap<&str, u64> = HashMap::new();
    let mut by_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    let mut by_month: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    let mut by_week: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    let mut comparison = PeriodComparison::default();

    let current_start = now - Duration::days(COMPARISON_PERIOD_DAYS);
    let previous_start = now - Duration::days(2 * COMPARISON_PERIOD_DAYS);

    for p in points {
        summary.total_cases += 1;
        match p.severity.value() {
            3 => summary.high_severity += 1,
            2 => summary.medium_severity += 1,
            _ => summary.low_severity += 1,
        }
        let t = p.reported_time;
        summary.min_time = Some(summary.min_time.map_or(t, |m| m.min(t)));
        summary.max_time = Some(summary.max_time.map_or(t, |m| m.max(t)));

        *by_disease.entry(p.disease_type.as_str()).or_insert(0) += 1;
        *by_status.entry(p.status.as_str()).or_insert(0) += 1;

        let day = t.date_naive();
        *by_day.entry(day).or_insert(0) += 1;
        *by_month.entry(month_start(day)).or_insert(0) += 1;
        *by_week.entry(week_start(day)).or_insert(0) += 1;

        if t >= current_start {
            comparison.current_period += 1;
        } else if t >= previous_start {
            comparison.previous_period += 1;
        }
    }

    let skip = by_week.len().saturating_sub(WEEKLY_TREND_WEEKS);

    CaseStats {
        summary,
        by_disease: ranked(by_disease),
        by_status: ranked(by_status),
        by_day: dated(by_day),
        by_month: dated(by_month),
        by_week: dated(by_week).into_iter().skip(skip).collect(),
        comparison,
    }
}

fn month_start(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_monday()))
}

fn ranked(counts: HashMap<&str, u64>) -> Vec<LabeledCount> {
    let mut out: Vec<LabeledCount> = counts
        .into_iter()
        .map(|(label, total)| LabeledCount {
            label: label.to_string(),
            total,
        })
        .collect();
    out.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.label.cmp(&b.label)));
    out
}

fn dated(counts: BTreeMap<NaiveDate, u64>) -> Vec<DatedCount> {
    counts
        .into_iter()
        .map(|(date, total)| DatedCount { date, total })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_starts_on_monday() {
        // 2024-06-06 is a Thursday
        let d = NaiveDate::from_ymd_opt(2024, 6, 6).unwrap();
        assert_eq!(week_start(d), NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(month_start(d), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn empty_snapshot() {
        let s = summarize(&[], Utc::now());
        assert_eq!(s.summary.total_cases, 0);
        assert!(s.summary.min_time.is_none());
        assert!(s.by_week.is_empty());
    }
}
