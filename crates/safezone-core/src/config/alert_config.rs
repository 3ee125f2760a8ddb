use serde::{Deserialize, Serialize};

use super::defaults;

/// Language used for alert titles and bodies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Vi,
    En,
}

/// Alert dispatch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Tokens per multicast batch. Capped at the provider limit of 500.
    pub batch_size: usize,
    /// Batches in flight at once.
    pub max_parallel_batches: usize,
    /// Topic used for announcements and outbreak alerts.
    pub default_topic: String,
    pub locale: Locale,
    /// Suppress repeat zone-entry alerts for the same (user, zone) within
    /// this window. 0 disables.
    pub zone_entry_cooldown_secs: u64,
    pub cooldown_max_entries: u64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            batch_size: defaults::DEFAULT_BATCH_SIZE,
            max_parallel_batches: defaults::DEFAULT_MAX_PARALLEL_BATCHES,
            default_topic: defaults::DEFAULT_TOPIC.to_string(),
            locale: Locale::default(),
            zone_entry_cooldown_secs: defaults::DEFAULT_ZONE_ENTRY_COOLDOWN_SECS,
            cooldown_max_entries: defaults::DEFAULT_COOLDOWN_MAX_ENTRIES,
        }
    }
}
