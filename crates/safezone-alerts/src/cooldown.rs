//! Optional zone-entry cooldown keyed by (user, zone).

use std::time::Duration;

use moka::sync::Cache;

use safezone_core::models::AlertEvent;

pub struct ZoneEntryCooldown {
    cache: Cache<String, ()>,
}

impl ZoneEntryCooldown {
    pub fn new(ttl: Duration, max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();
        Self { cache }
    }

    /// Start a window for (user, zone). Returns `false` if one is already
    /// open, i.e. the alert should be suppressed.
    pub fn try_acquire(&self, user_id: &str, zone_id: &str) -> bool {
        self.cache
            .entry(AlertEvent::dedup_key_for(user_id, zone_id))
            .or_insert(())
            .is_fresh()
    }

    pub fn is_cooling(&self, user_id: &str, zone_id: &str) -> bool {
        self.cache
            .contains_key(&AlertEvent::dedup_key_for(user_id, zone_id))
    }

    /// Close the window for (user, zone).
    pub fn release(&self, user_id: &str, zone_id: &str) {
        self.cache
            .invalidate(&AlertEvent::dedup_key_for(user_id, zone_id));
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
