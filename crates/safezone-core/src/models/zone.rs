use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::geo_point::GeoPoint;
use super::risk_level::RiskLevel;

/// A named circular epidemic zone. Persisted externally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub disease_type: String,
    pub center: GeoPoint,
    pub radius_km: f64,
    #[serde(default)]
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub case_count: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl Zone {
    pub fn latitude(&self) -> f64 {
        self.center.lat
    }

    pub fn longitude(&self) -> f64 {
        self.center.lon
    }
}
