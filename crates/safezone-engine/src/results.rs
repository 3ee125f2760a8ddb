use serde::{Deserialize, Serialize};

use safezone_core::models::{AlertEvent, Zone};

/// Answer to "is this coordinate inside any active zone?".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneCheck {
    pub in_zone: bool,
    /// Highest risk first, then by case count.
    pub zones: Vec<Zone>,
}

impl ZoneCheck {
    pub fn new(zones: Vec<Zone>) -> Self {
        Self {
            in_zone: !zones.is_empty(),
            zones,
        }
    }
}

/// Zone check plus the alert it triggered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationAlert {
    pub in_zone: bool,
    pub zones: Vec<Zone>,
    /// True whenever a dispatch was attempted, whatever its push outcome.
    /// False when the zone-entry cooldown suppressed it.
    pub alert_sent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<AlertEvent>,
}
