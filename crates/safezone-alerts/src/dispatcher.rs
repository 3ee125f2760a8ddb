use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use safezone_core::config::AlertConfig;
use safezone_core::constants::MAX_TOKENS_PER_BATCH;
use safezone_core::errors::{AlertError, SafeZoneResult};
use safezone_core::models::{
    AlertChannel, AlertEvent, NotificationKind, NotificationRecord, PushErrorKind, PushFailure,
    PushPayload, SkipReason, Zone,
};
use safezone_core::traits::{INotificationStore, IPushChannel};
use safezone_observability::events;

use crate::batch::{aggregate, send_batches, BatchResult};
use crate::cooldown::ZoneEntryCooldown;
use crate::templates;

/// Orchestrates alert delivery.
///
/// The push channel is injected once and shared. Broadcast batches run on a
/// dedicated pool of `max_parallel_batches` threads.
pub struct AlertDispatcher {
    config: AlertConfig,
    channel: Arc<dyn IPushChannel>,
    store: Arc<dyn INotificationStore>,
    pool: rayon::ThreadPool,
    cooldown: Option<ZoneEntryCooldown>,
}

impl AlertDispatcher {
    pub fn new(
        config: AlertConfig,
        channel: Arc<dyn IPushChannel>,
        store: Arc<dyn INotificationStore>,
    ) -> SafeZoneResult<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.max_parallel_batches.max(1))
            .thread_name(|i| format!("safezone-push-{i}"))
            .build()
            .map_err(|e| AlertError::PoolBuildFailed {
                reason: e.to_string(),
            })?;

        let cooldown = (config.zone_entry_cooldown_secs > 0).then(|| {
            ZoneEntryCooldown::new(
                Duration::from_secs(config.zone_entry_cooldown_secs),
                config.cooldown_max_entries,
            )
        });

        Ok(Self {
            config,
            channel,
            store,
            pool,
            cooldown,
        })
    }

    pub fn config(&self) -> &AlertConfig {
        &self.config
    }

    pub fn channel_name(&self) -> &str {
        self.channel.name()
    }

    fn batch_size(&self) -> usize {
        self.config.batch_size.clamp(1, MAX_TOKENS_PER_BATCH)
    }

    /// Alert `user_id` about the highest-risk zone in `zones`.
    ///
    /// `zones` must be ordered by priority, as returned by the zone matcher.
    /// A missing device token ends in `Skipped`; the in-app record is
    /// written either way. Only persistence errors are returned, and they
    /// leave no cooldown window behind.
    pub fn dispatch_zone_entry(&self, user_id: &str, zones: &[Zone]) -> SafeZoneResult<AlertEvent> {
        let zone = zones.first().ok_or(AlertError::NoMatchedZones)?;
        let payload = templates::zone_entry(zone, self.config.locale);
        let mut event = AlertEvent::new(
            Some(user_id.to_string()),
            Some(zone.id.clone()),
            AlertChannel::Device,
            payload,
            AlertEvent::dedup_key_for(user_id, &zone.id),
        );
        event.begin_dispatch()?;

        let token = self.store.device_token(user_id)?;

        if let Some(ref cooldown) = self.cooldown {
            if !cooldown.try_acquire(user_id, &zone.id) {
                event.mark_skipped(SkipReason::Cooldown)?;
                self.log_outcome(&event);
                return Ok(event);
            }
        }

        match token {
            None => {
                tracing::warn!(user_id, "user has no device token, skipping push");
                event.mark_skipped(SkipReason::NoDeviceToken)?;
            }
            Some(token) => match self.channel.send_to_device(&token, &event.payload) {
                Ok(message_id) => event.mark_delivered(Some(message_id))?,
                Err(failure) => self.record_failure(&mut event, failure)?,
            },
        }

        let record =
            NotificationRecord::for_user(user_id, &event.payload, NotificationKind::ZoneEntry);
        if let Err(e) = self.store.record_notification(&record) {
            // the caller will retry; the window must not swallow the retry
            if let Some(ref cooldown) = self.cooldown {
                cooldown.release(user_id, &zone.id);
            }
            return Err(e);
        }

        self.log_outcome(&event);
        Ok(event)
    }

    /// Send `payload` to every token in `tokens`, in batches of at most 500.
    ///
    /// A failing batch adds its whole size to `failure_count` and the rest
    /// carry on. One broadcast record of `kind` is written.
    pub fn broadcast(
        &self,
        payload: PushPayload,
        tokens: &[String],
        kind: NotificationKind,
    ) -> SafeZoneResult<BatchResult> {
        let mut event = AlertEvent::new(
            None,
            payload.data.get("zoneId").cloned(),
            AlertChannel::DeviceBatch,
            payload,
            format!("broadcast:{}", kind.as_str()),
        );
        event.begin_dispatch()?;

        let mut result = if tokens.is_empty() {
            event.mark_skipped(SkipReason::EmptyAudience)?;
            BatchResult::default()
        } else {
            let batch_size = self.batch_size();
            let channel = self.channel.as_ref();
            let payload = &event.payload;
            let outcomes = self
                .pool
                .install(|| send_batches(channel, tokens, batch_size, payload));
            let (result, last_failure) = aggregate(outcomes);

            if result.success_count > 0 {
                event.mark_delivered(None)?;
            } else {
                event.mark_failed(last_failure.unwrap_or_else(|| {
                    PushFailure::new(PushErrorKind::Transient, "no device accepted the message")
                }))?;
            }
            events::broadcast_completed(
                result.batches,
                result.success_count,
                result.failure_count,
                result.invalid_tokens.len(),
            );
            result
        };

        self.store
            .record_notification(&NotificationRecord::broadcast(&event.payload, kind))?;

        self.log_outcome(&event);
        result.event = Some(event);
        Ok(result)
    }

    /// Send `payload` to a named topic and write a broadcast record.
    pub fn send_topic(
        &self,
        topic: &str,
        payload: PushPayload,
        kind: NotificationKind,
    ) -> SafeZoneResult<AlertEvent> {
        let mut event = AlertEvent::new(
            None,
            payload.data.get("zoneId").cloned(),
            AlertChannel::Topic,
            payload,
            format!("topic:{topic}"),
        );
        event.begin_dispatch()?;

        match self.channel.send_to_topic(topic, &event.payload) {
            Ok(message_id) => event.mark_delivered(Some(message_id))?,
            Err(failure) => self.record_failure(&mut event, failure)?,
        }

        self.store
            .record_notification(&NotificationRecord::broadcast(&event.payload, kind))?;

        self.log_outcome(&event);
        Ok(event)
    }

    /// System-wide announcement on the default topic.
    pub fn announce_system(
        &self,
        title: &str,
        body: &str,
        data: BTreeMap<String, String>,
    ) -> SafeZoneResult<AlertEvent> {
        let payload = templates::announcement(title, body, data);
        self.send_topic(&self.config.default_topic, payload, NotificationKind::System)
    }

    /// Announce a new or escalated outbreak zone to every user.
    pub fn broadcast_outbreak(&self, zone: &Zone) -> SafeZoneResult<AlertEvent> {
        let payload = templates::outbreak(zone, self.config.locale);
        self.send_topic(
            &self.config.default_topic,
            payload,
            NotificationKind::EpidemicAlert,
        )
    }

    fn record_failure(&self, event: &mut AlertEvent, failure: PushFailure) -> SafeZoneResult<()> {
        events::push_failed(self.channel.name(), failure.kind.as_str(), &failure.message);
        if failure.kind == PushErrorKind::InvalidToken {
            events::token_invalidated(event.user_id.as_deref());
        }
        event.mark_failed(failure)
    }

    fn log_outcome(&self, event: &AlertEvent) {
        let channel = match event.channel {
            AlertChannel::Device => "device",
            AlertChannel::DeviceBatch => "device_batch",
            AlertChannel::Topic => "topic",
        };
        events::alert_dispatched(
            &event.id,
            channel,
            event.delivery_state.as_str(),
            &event.dedup_key,
        );
    }
}
