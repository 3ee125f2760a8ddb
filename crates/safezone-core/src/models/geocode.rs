use serde::{Deserialize, Serialize};

/// Partial administrative address produced by one geocoding stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocodeFragment {
    pub commune: Option<String>,
    pub district: Option<String>,
    pub province: Option<String>,
    pub display_name: Option<String>,
    pub zone_id: Option<String>,
}

/// Final reverse-geocoding answer. `address` is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseGeocodeResult {
    pub address: String,
    pub commune: Option<String>,
    pub district: Option<String>,
    pub province: Option<String>,
    pub zone_id: Option<String>,
}
