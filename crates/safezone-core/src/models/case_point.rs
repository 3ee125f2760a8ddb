use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::geo_point::GeoPoint;
use super::severity::Severity;

/// A geotagged disease case. Immutable snapshot for the duration of a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasePoint {
    pub id: String,
    pub disease_type: String,
    pub status: String,
    #[serde(default)]
    pub severity: Severity,
    pub reported_time: DateTime<Utc>,
    pub lat: f64,
    pub lon: f64,
}

impl CasePoint {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}
