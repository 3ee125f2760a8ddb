pub mod alert_config;
pub mod analysis_config;
pub mod defaults;
pub mod geocoder_config;
pub mod observability_config;
pub mod push_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use alert_config::{AlertConfig, Locale};
pub use analysis_config::{ClusterConfig, GridConfig, ZonesConfig};
pub use geocoder_config::GeocoderConfig;
pub use observability_config::ObservabilityConfig;
pub use push_config::PushConfig;

use crate::constants::MAX_TOKENS_PER_BATCH;
use crate::errors::{SafeZoneError, SafeZoneResult};

/// Top-level configuration aggregating every subsystem section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SafeZoneConfig {
    pub grid: GridConfig,
    pub cluster: ClusterConfig,
    pub zones: ZonesConfig,
    pub alerts: AlertConfig,
    pub push: PushConfig,
    pub geocoder: GeocoderConfig,
    pub observability: ObservabilityConfig,
}

impl SafeZoneConfig {
    /// Parse from a TOML string. Missing sections and fields take defaults.
    pub fn from_toml(input: &str) -> SafeZoneResult<Self> {
        let config: Self =
            toml::from_str(input).map_err(|e| SafeZoneError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> SafeZoneResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            SafeZoneError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&raw)
    }

    /// Reject values the engines cannot work with.
    pub fn validate(&self) -> SafeZoneResult<()> {
        if !positive(self.grid.default_cell_size_deg) {
            return Err(SafeZoneError::ConfigError(
                "grid.default_cell_size_deg must be > 0".into(),
            ));
        }
        if !positive(self.cluster.default_eps_deg) {
            return Err(SafeZoneError::ConfigError(
                "cluster.default_eps_deg must be > 0".into(),
            ));
        }
        if !positive(self.zones.nearby_default_radius_km) {
            return Err(SafeZoneError::ConfigError(
                "zones.nearby_default_radius_km must be > 0".into(),
            ));
        }
        if self.alerts.batch_size == 0 || self.alerts.batch_size > MAX_TOKENS_PER_BATCH {
            return Err(SafeZoneError::ConfigError(format!(
                "alerts.batch_size must be in 1..={MAX_TOKENS_PER_BATCH}"
            )));
        }
        if self.alerts.max_parallel_batches == 0 {
            return Err(SafeZoneError::ConfigError(
                "alerts.max_parallel_batches must be >= 1".into(),
            ));
        }
        if self.alerts.default_topic.trim().is_empty() {
            return Err(SafeZoneError::ConfigError(
                "alerts.default_topic must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
