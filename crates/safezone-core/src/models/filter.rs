use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::case_point::CasePoint;
use super::geo_point::Bounds;

/// Filter passed to `IPointStore::list_points`. Every field is optional and
/// the set fields are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseFilter {
    pub disease_type: Option<String>,
    pub status: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub bounds: Option<Bounds>,
}

impl CaseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disease(mut self, disease_type: impl Into<String>) -> Self {
        self.disease_type = Some(disease_type.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn between(mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    pub fn within(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Whether a case satisfies this filter. Time range edges are inclusive.
    pub fn matches(&self, point: &CasePoint) -> bool {
        if let Some(ref d) = self.disease_type {
            if &point.disease_type != d {
                return false;
            }
        }
        if let Some(ref s) = self.status {
            if &point.status != s {
                return false;
            }
        }
        if let Some(from) = self.from {
            if point.reported_time < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if point.reported_time > to {
                return false;
            }
        }
        match self.bounds {
            Some(b) => b.contains(point.location()),
            None => true,
        }
    }
}
