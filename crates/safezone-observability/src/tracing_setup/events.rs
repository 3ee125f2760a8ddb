//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

pub fn grid_computed(cell_size_deg: f64, cells: usize, total_cases: u64) {
    tracing::info!(
        event = "grid_computed",
        cell_size_deg = cell_size_deg,
        cells = cells,
        total_cases = total_cases,
        "grid density computed"
    );
}

pub fn clusters_computed(eps_deg: f64, clusters: usize, total_cases: u64) {
    tracing::info!(
        event = "clusters_computed",
        eps_deg = eps_deg,
        clusters = clusters,
        total_cases = total_cases,
        "clusters computed"
    );
}

pub fn zone_check_completed(lat: f64, lon: f64, matched: usize) {
    tracing::debug!(
        event = "zone_check_completed",
        lat = lat,
        lon = lon,
        matched = matched,
        "zone check completed"
    );
}

/// Log the terminal state of one dispatch.
pub fn alert_dispatched(alert_id: &str, channel: &str, state: &str, dedup_key: &str) {
    tracing::info!(
        event = "alert_dispatched",
        alert_id = %alert_id,
        channel = %channel,
        state = %state,
        dedup_key = %dedup_key,
        "alert dispatched"
    );
}

pub fn push_failed(channel: &str, kind: &str, message: &str) {
    tracing::warn!(
        event = "push_failed",
        channel = %channel,
        kind = %kind,
        message = %message,
        "push delivery failed"
    );
}

pub fn push_batch_failed(batch_index: usize, batch_size: usize, kind: &str, message: &str) {
    tracing::warn!(
        event = "push_batch_failed",
        batch_index = batch_index,
        batch_size = batch_size,
        kind = %kind,
        message = %message,
        "push batch failed"
    );
}

pub fn broadcast_completed(batches: usize, success: usize, failure: usize, invalid: usize) {
    tracing::info!(
        event = "broadcast_completed",
        batches = batches,
        success = success,
        failure = failure,
        invalid_tokens = invalid,
        "broadcast completed"
    );
}

/// A device token was rejected as invalid and should be pruned.
pub fn token_invalidated(user_id: Option<&str>) {
    tracing::warn!(
        event = "token_invalidated",
        user_id = ?user_id,
        "device token invalidated"
    );
}

pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}
