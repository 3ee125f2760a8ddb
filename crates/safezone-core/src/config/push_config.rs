use serde::{Deserialize, Serialize};

use super::defaults;

/// FCM HTTP v1 push channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PushConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub project_id: Option<String>,
    /// OAuth2 access token. Minted outside the engine.
    pub bearer_token: Option<String>,
    pub timeout_secs: u64,
    pub android_channel_id: String,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: defaults::DEFAULT_PUSH_ENDPOINT.to_string(),
            project_id: None,
            bearer_token: None,
            timeout_secs: defaults::DEFAULT_PUSH_TIMEOUT_SECS,
            android_channel_id: defaults::DEFAULT_ANDROID_CHANNEL_ID.to_string(),
        }
    }
}
