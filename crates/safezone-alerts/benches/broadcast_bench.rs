use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use safezone_alerts::AlertDispatcher;
use safezone_core::config::AlertConfig;
use safezone_core::models::{NotificationKind, PushPayload};
use test_fixtures::{InMemoryNotificationStore, ScriptedPushChannel};

fn bench_broadcast_10k(c: &mut Criterion) {
    let tokens: Vec<String> = (0..10_000).map(|i| format!("tok-{i}")).collect();
    let dispatcher = AlertDispatcher::new(
        AlertConfig::default(),
        Arc::new(ScriptedPushChannel::new()),
        Arc::new(InMemoryNotificationStore::new()),
    )
    .unwrap();
    let payload = PushPayload::new("t", "b");

    c.bench_function("broadcast_10k_tokens", |b| {
        b.iter(|| {
            dispatcher
                .broadcast(payload.clone(), black_box(&tokens), NotificationKind::EpidemicAlert)
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_broadcast_10k);
criterion_main!(benches);
