use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::push::{PushErrorKind, PushFailure, PushPayload};
use crate::errors::{AlertError, SafeZoneResult};

/// Delivery lifecycle of an alert:
/// `Created → Dispatching → {Delivered | Failed | Skipped}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryState {
    Created,
    Dispatching,
    Delivered,
    Failed,
    Skipped,
}

impl DeliveryState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Failed | Self::Skipped)
    }

    /// Whether `self → next` is an edge of the lifecycle.
    pub fn can_transition_to(self, next: DeliveryState) -> bool {
        matches!(
            (self, next),
            (Self::Created, Self::Dispatching)
                | (Self::Dispatching, Self::Delivered)
                | (Self::Dispatching, Self::Failed)
                | (Self::Dispatching, Self::Skipped)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Dispatching => "DISPATCHING",
            Self::Delivered => "DELIVERED",
            Self::Failed => "FAILED",
            Self::Skipped => "SKIPPED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertChannel {
    Device,
    DeviceBatch,
    Topic,
}

/// Why an alert ended in `Skipped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NoDeviceToken,
    Cooldown,
    EmptyAudience,
}

/// One dispatch attempt and its outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertEvent {
    pub id: String,
    pub user_id: Option<String>,
    pub zone_id: Option<String>,
    pub channel: AlertChannel,
    pub payload: PushPayload,
    pub dedup_key: String,
    pub timestamp: DateTime<Utc>,
    pub delivery_state: DeliveryState,
    pub message_id: Option<String>,
    pub failure: Option<PushFailure>,
    pub skip_reason: Option<SkipReason>,
}

impl AlertEvent {
    /// New event in `Created`.
    pub fn new(
        user_id: Option<String>,
        zone_id: Option<String>,
        channel: AlertChannel,
        payload: PushPayload,
        dedup_key: String,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id,
            zone_id,
            channel,
            payload,
            dedup_key,
            timestamp: Utc::now(),
            delivery_state: DeliveryState::Created,
            message_id: None,
            failure: None,
            skip_reason: None,
        }
    }

    /// Key identifying repeat alerts for the same recipient and zone.
    pub fn dedup_key_for(user_id: &str, zone_id: &str) -> String {
        format!("{user_id}:{zone_id}")
    }

    fn transition(&mut self, next: DeliveryState) -> SafeZoneResult<()> {
        if !self.delivery_state.can_transition_to(next) {
            return Err(AlertError::InvalidTransition {
                from: self.delivery_state.as_str().to_string(),
                to: next.as_str().to_string(),
            }
            .into());
        }
        self.delivery_state = next;
        Ok(())
    }

    pub fn begin_dispatch(&mut self) -> SafeZoneResult<()> {
        self.transition(DeliveryState::Dispatching)
    }

    pub fn mark_delivered(&mut self, message_id: Option<String>) -> SafeZoneResult<()> {
        self.transition(DeliveryState::Delivered)?;
        self.message_id = message_id;
        Ok(())
    }

    pub fn mark_failed(&mut self, failure: PushFailure) -> SafeZoneResult<()> {
        self.transition(DeliveryState::Failed)?;
        self.failure = Some(failure);
        Ok(())
    }

    pub fn mark_skipped(&mut self, reason: SkipReason) -> SafeZoneResult<()> {
        self.transition(DeliveryState::Skipped)?;
        self.skip_reason = Some(reason);
        Ok(())
    }

    /// Whether the stored device token should be pruned by the caller.
    pub fn should_prune_token(&self) -> bool {
        self.failure
            .as_ref()
            .is_some_and(|f| f.kind == PushErrorKind::InvalidToken)
    }
}
