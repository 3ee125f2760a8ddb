use std::collections::BTreeMap;
use std::sync::Arc;

use safezone_alerts::AlertDispatcher;
use safezone_core::config::AlertConfig;
use safezone_core::errors::{AlertError, SafeZoneError};
use safezone_core::models::{
    DeliveryState, GeoPoint, NotificationKind, PushErrorKind, PushPayload, RiskLevel, SkipReason, Zone,
};
use test_fixtures::generators::zone;
use test_fixtures::{InMemoryNotificationStore, ScriptedPushChannel};

fn tokens(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("tok-{i:04}")).collect()
}

fn dispatcher(
    config: AlertConfig,
    channel: ScriptedPushChannel,
    store: InMemoryNotificationStore,
) -> (AlertDispatcher, Arc<ScriptedPushChannel>, Arc<InMemoryNotificationStore>) {
    let channel = Arc::new(channel);
    let store = Arc::new(store);
    let d = AlertDispatcher::new(config, channel.clone(), store.clone()).unwrap();
    (d, channel, store)
}

fn hot_zones() -> Vec<Zone> {
    vec![
        zone("z-crit", GeoPoint::new(10.77, 106.75), 2.0, RiskLevel::Critical, 120),
        zone("z-high", GeoPoint::new(10.78, 106.76), 3.0, RiskLevel::High, 60),
    ]
}

// ---- zone entry ----

#[test]
fn zone_entry_delivers_to_user_device() {
    let store = InMemoryNotificationStore::new().with_token("u1", "tok-u1");
    let (d, channel, store) = dispatcher(AlertConfig::default(), ScriptedPushChannel::new(), store);

    let event = d.dispatch_zone_entry("u1", &hot_zones()).unwrap();

    assert_eq!(event.delivery_state, DeliveryState::Delivered);
    assert_eq!(event.zone_id.as_deref(), Some("z-crit"));
    assert_eq!(event.dedup_key, "u1:z-crit");
    assert!(event.message_id.is_some());
    assert_eq!(channel.device_sends(), vec!["tok-u1".to_string()]);

    let records = store.records_for("u1");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind, NotificationKind::ZoneEntry);
    assert!(!records[0].is_read);
    assert_eq!(records[0].data.get("zoneId").map(String::as_str), Some("z-crit"));
}

#[test]
fn user_without_token_is_skipped_but_recorded() {
    let (d, channel, store) = dispatcher(
        AlertConfig::default(),
        ScriptedPushChannel::new(),
        InMemoryNotificationStore::new(),
    );

    let event = d.dispatch_zone_entry("u-none", &hot_zones()).unwrap();

    assert_eq!(event.delivery_state, DeliveryState::Skipped);
    assert_eq!(event.skip_reason, Some(SkipReason::NoDeviceToken));
    assert!(channel.device_sends().is_empty());
    assert_eq!(store.records_for("u-none").len(), 1);
}

#[test]
fn invalid_token_fails_and_signals_prune() {
    let store = InMemoryNotificationStore::new().with_token("u1", "stale");
    let channel = ScriptedPushChannel::new().with_invalid_token("stale");
    let (d, _, store) = dispatcher(AlertConfig::default(), channel, store);

    let event = d.dispatch_zone_entry("u1", &hot_zones()).unwrap();

    assert_eq!(event.delivery_state, DeliveryState::Failed);
    assert_eq!(
        event.failure.as_ref().map(|f| f.kind),
        Some(PushErrorKind::InvalidToken)
    );
    assert!(event.should_prune_token());
    assert_eq!(store.records_for("u1").len(), 1);
}

#[test]
fn unavailable_channel_is_a_failed_attempt_not_an_error() {
    let store = InMemoryNotificationStore::new().with_token("u1", "tok-u1");
    let (d, _, store) = dispatcher(AlertConfig::default(), ScriptedPushChannel::unavailable(), store);

    let event = d.dispatch_zone_entry("u1", &hot_zones()).unwrap();

    assert_eq!(event.delivery_state, DeliveryState::Failed);
    assert_eq!(
        event.failure.map(|f| f.kind),
        Some(PushErrorKind::ChannelUnavailable)
    );
    assert_eq!(store.records().len(), 1);
}

#[test]
fn empty_zone_list_is_rejected() {
    let (d, _, store) = dispatcher(
        AlertConfig::default(),
        ScriptedPushChannel::new(),
        InMemoryNotificationStore::new(),
    );
    let err = d.dispatch_zone_entry("u1", &[]).unwrap_err();
    assert!(matches!(err, SafeZoneError::AlertError(AlertError::NoMatchedZones)));
    assert!(store.records().is_empty());
}

#[test]
fn record_write_failure_propagates() {
    let store = InMemoryNotificationStore::new().with_token("u1", "tok-u1");
    store.set_fail_writes(true);
    let (d, _, _) = dispatcher(AlertConfig::default(), ScriptedPushChannel::new(), store);

    let err = d.dispatch_zone_entry("u1", &hot_zones()).unwrap_err();
    assert!(matches!(err, SafeZoneError::StorageError(_)));
}

#[test]
fn cooldown_suppresses_repeat_entry_alerts() {
    let config = AlertConfig {
        zone_entry_cooldown_secs: 600,
        ..AlertConfig::default()
    };
    let store = InMemoryNotificationStore::new().with_token("u1", "tok-u1");
    let (d, channel, store) = dispatcher(config, ScriptedPushChannel::new(), store);

    let first = d.dispatch_zone_entry("u1", &hot_zones()).unwrap();
    let second = d.dispatch_zone_entry("u1", &hot_zones()).unwrap();

    assert_eq!(first.delivery_state, DeliveryState::Delivered);
    assert_eq!(second.delivery_state, DeliveryState::Skipped);
    assert_eq!(second.skip_reason, Some(SkipReason::Cooldown));
    assert_eq!(channel.device_sends().len(), 1);
    assert_eq!(store.records_for("u1").len(), 1);
}

#[test]
fn failed_token_lookup_leaves_no_cooldown_window() {
    let config = AlertConfig {
        zone_entry_cooldown_secs: 600,
        ..AlertConfig::default()
    };
    let store = InMemoryNotificationStore::new().with_token("u1", "tok-u1");
    store.set_fail_reads(true);
    let (d, channel, store) = dispatcher(config, ScriptedPushChannel::new(), store);

    let err = d.dispatch_zone_entry("u1", &hot_zones()).unwrap_err();
    assert!(matches!(err, SafeZoneError::StorageError(_)));

    store.set_fail_reads(false);
    let retry = d.dispatch_zone_entry("u1", &hot_zones()).unwrap();
    assert_eq!(retry.delivery_state, DeliveryState::Delivered);
    assert_eq!(channel.device_sends().len(), 1);
    assert_eq!(store.records_for("u1").len(), 1);
}

#[test]
fn failed_record_write_releases_cooldown_window() {
    let config = AlertConfig {
        zone_entry_cooldown_secs: 600,
        ..AlertConfig::default()
    };
    let store = InMemoryNotificationStore::new().with_token("u1", "tok-u1");
    store.set_fail_writes(true);
    let (d, _, store) = dispatcher(config, ScriptedPushChannel::new(), store);

    assert!(d.dispatch_zone_entry("u1", &hot_zones()).is_err());

    store.set_fail_writes(false);
    let retry = d.dispatch_zone_entry("u1", &hot_zones()).unwrap();
    assert_eq!(retry.delivery_state, DeliveryState::Delivered);
    assert_eq!(store.records_for("u1").len(), 1);
}

#[test]
fn cooldown_is_off_by_default() {
    let store = InMemoryNotificationStore::new().with_token("u1", "tok-u1");
    let (d, channel, _) = dispatcher(AlertConfig::default(), ScriptedPushChannel::new(), store);

    d.dispatch_zone_entry("u1", &hot_zones()).unwrap();
    d.dispatch_zone_entry("u1", &hot_zones()).unwrap();
    assert_eq!(channel.device_sends().len(), 2);
}

// ---- broadcast ----

#[test]
fn broadcast_splits_into_provider_sized_batches() {
    let (d, channel, store) = dispatcher(
        AlertConfig::default(),
        ScriptedPushChannel::new(),
        InMemoryNotificationStore::new(),
    );

    let result = d
        .broadcast(PushPayload::new("t", "b"), &tokens(1200), NotificationKind::EpidemicAlert)
        .unwrap();

    assert_eq!(result.batches, 3);
    assert_eq!(result.success_count, 1200);
    assert_eq!(result.failure_count, 0);
    let mut sizes = channel.batch_sizes();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![200, 500, 500]);

    let event = result.event.unwrap();
    assert_eq!(event.delivery_state, DeliveryState::Delivered);
    let records = store.records();
    assert_eq!(records.len(), 1);
    assert!(records[0].is_broadcast);
    assert!(records[0].user_id.is_none());
}

#[test]
fn failed_batch_counts_whole_batch_and_others_continue() {
    let all = tokens(1200);
    let channel = ScriptedPushChannel::new()
        .with_poison_token(&all[700])
        .with_invalid_token(&all[10]);
    let (d, _, _) = dispatcher(AlertConfig::default(), channel, InMemoryNotificationStore::new());

    let result = d
        .broadcast(PushPayload::new("t", "b"), &all, NotificationKind::EpidemicAlert)
        .unwrap();

    assert_eq!(result.success_count + result.failure_count, 1200);
    assert_eq!(result.failure_count, 501);
    assert_eq!(result.success_count, 699);
    assert_eq!(result.failed_batches, vec![1]);
    assert_eq!(result.invalid_tokens, vec![all[10].clone()]);
    assert_eq!(
        result.event.map(|e| e.delivery_state),
        Some(DeliveryState::Delivered)
    );
}

#[test]
fn configured_batch_size_is_respected() {
    let config = AlertConfig {
        batch_size: 100,
        max_parallel_batches: 2,
        ..AlertConfig::default()
    };
    let (d, channel, _) = dispatcher(config, ScriptedPushChannel::new(), InMemoryNotificationStore::new());

    let result = d
        .broadcast(PushPayload::new("t", "b"), &tokens(250), NotificationKind::System)
        .unwrap();

    assert_eq!(result.batches, 3);
    assert_eq!(channel.batch_sizes().iter().sum::<usize>(), 250);
    assert!(channel.batch_sizes().iter().all(|&s| s <= 100));
}

#[test]
fn broadcast_on_unavailable_channel_fails_every_batch() {
    let (d, _, store) = dispatcher(
        AlertConfig::default(),
        ScriptedPushChannel::unavailable(),
        InMemoryNotificationStore::new(),
    );

    let result = d
        .broadcast(PushPayload::new("t", "b"), &tokens(600), NotificationKind::EpidemicAlert)
        .unwrap();

    assert_eq!(result.success_count, 0);
    assert_eq!(result.failure_count, 600);
    assert_eq!(result.failed_batches, vec![0, 1]);
    let event = result.event.unwrap();
    assert_eq!(event.delivery_state, DeliveryState::Failed);
    assert_eq!(
        event.failure.map(|f| f.kind),
        Some(PushErrorKind::ChannelUnavailable)
    );
    assert_eq!(store.records().len(), 1);
}

#[test]
fn empty_audience_is_skipped() {
    let (d, channel, store) = dispatcher(
        AlertConfig::default(),
        ScriptedPushChannel::new(),
        InMemoryNotificationStore::new(),
    );

    let result = d
        .broadcast(PushPayload::new("t", "b"), &[], NotificationKind::System)
        .unwrap();

    assert_eq!(result.batches, 0);
    assert_eq!(result.attempted(), 0);
    assert!(channel.batch_sizes().is_empty());
    let event = result.event.unwrap();
    assert_eq!(event.skip_reason, Some(SkipReason::EmptyAudience));
    assert_eq!(store.records().len(), 1);
}

// ---- topic ----

#[test]
fn announcement_goes_to_default_topic() {
    let (d, channel, store) = dispatcher(
        AlertConfig::default(),
        ScriptedPushChannel::new(),
        InMemoryNotificationStore::new(),
    );

    let data = BTreeMap::from([("link".to_string(), "https://moh.gov.vn".to_string())]);
    let event = d.announce_system("Bảo trì", "Hệ thống bảo trì lúc 22h", data).unwrap();

    assert_eq!(event.delivery_state, DeliveryState::Delivered);
    let sends = channel.topic_sends();
    assert_eq!(sends.len(), 1);
    assert_eq!(sends[0].0, "all");
    assert_eq!(sends[0].1.title, "📢 Bảo trì");
    assert_eq!(sends[0].1.data.get("type").map(String::as_str), Some("system"));

    let records = store.records();
    assert_eq!(records[0].kind, NotificationKind::System);
    assert!(records[0].is_broadcast);
}

#[test]
fn outbreak_alert_is_an_epidemic_record() {
    let (d, channel, store) = dispatcher(
        AlertConfig::default(),
        ScriptedPushChannel::new(),
        InMemoryNotificationStore::new(),
    );

    let z = &hot_zones()[0];
    let event = d.broadcast_outbreak(z).unwrap();

    assert_eq!(event.zone_id.as_deref(), Some("z-crit"));
    assert_eq!(
        channel.topic_sends()[0].1.data.get("type").map(String::as_str),
        Some("epidemic_alert")
    );
    assert_eq!(store.records()[0].kind, NotificationKind::EpidemicAlert);
}

#[test]
fn topic_failure_is_recorded() {
    let (d, _, store) = dispatcher(
        AlertConfig::default(),
        ScriptedPushChannel::unavailable(),
        InMemoryNotificationStore::new(),
    );
    let event = d
        .send_topic("news", PushPayload::new("t", "b"), NotificationKind::NewPost)
        .unwrap();
    assert_eq!(event.delivery_state, DeliveryState::Failed);
    assert_eq!(store.records()[0].kind, NotificationKind::NewPost);
}
