//! Every configuration default in one place.

// Grid
pub const DEFAULT_GRID_CELL_SIZE_DEG: f64 = 0.1;

// Cluster
pub const DEFAULT_CLUSTER_EPS_DEG: f64 = 0.05;

// Zones
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 10.0;

// Alerts
pub const DEFAULT_BATCH_SIZE: usize = 500;
pub const DEFAULT_MAX_PARALLEL_BATCHES: usize = 4;
pub const DEFAULT_TOPIC: &str = "all";
pub const DEFAULT_LOCALE: &str = "vi";
pub const DEFAULT_ZONE_ENTRY_COOLDOWN_SECS: u64 = 0;
pub const DEFAULT_COOLDOWN_MAX_ENTRIES: u64 = 100_000;

// Push
pub const DEFAULT_PUSH_ENDPOINT: &str = "https://fcm.googleapis.com";
pub const DEFAULT_PUSH_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_ANDROID_CHANNEL_ID: &str = "safezone_alerts";

// Geocoder
pub const DEFAULT_GEOCODER_ENDPOINT: &str = "https://nominatim.openstreetmap.org/reverse";
pub const DEFAULT_GEOCODER_USER_AGENT: &str = "SafeZone/1.0";
pub const DEFAULT_GEOCODER_LANGUAGE: &str = "vi";
pub const DEFAULT_GEOCODER_TIMEOUT_SECS: u64 = 5;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = true;
