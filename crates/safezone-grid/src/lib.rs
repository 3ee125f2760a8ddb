//! # safezone-grid
//!
//! Buckets case points into fixed-size degree cells and classifies each
//! cell's risk. Also produces the case statistics used by dashboards.

pub mod aggregator;
pub mod stats;

pub use aggregator::GridAggregator;
pub use stats::{CaseStats, CaseSummary, DatedCount, LabeledCount, PeriodComparison};
