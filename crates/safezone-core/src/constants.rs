/// SafeZone engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Provider hard limit on tokens per multicast request.
pub const MAX_TOKENS_PER_BATCH: usize = 500;

/// Topic every client subscribes to for system-wide announcements.
pub const TOPIC_ALL: &str = "all";

/// Mean Earth radius in kilometres (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Length of each period in the case-trend comparison.
pub const COMPARISON_PERIOD_DAYS: i64 = 30;

/// Number of most recent weeks kept in the weekly trend.
pub const WEEKLY_TREND_WEEKS: usize = 12;
