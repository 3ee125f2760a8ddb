use serde::{Deserialize, Serialize};

use super::defaults;

/// External reverse-geocoder (Nominatim) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocoderConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub user_agent: String,
    pub accept_language: String,
    pub timeout_secs: u64,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: defaults::DEFAULT_GEOCODER_ENDPOINT.to_string(),
            user_agent: defaults::DEFAULT_GEOCODER_USER_AGENT.to_string(),
            accept_language: defaults::DEFAULT_GEOCODER_LANGUAGE.to_string(),
            timeout_secs: defaults::DEFAULT_GEOCODER_TIMEOUT_SECS,
        }
    }
}
