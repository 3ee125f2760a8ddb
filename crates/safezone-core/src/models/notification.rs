use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::push::PushPayload;

/// Category of an in-app notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    EpidemicAlert,
    ZoneEntry,
    ReportUpdate,
    ZoneUpdate,
    NewPost,
    System,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EpidemicAlert => "epidemic_alert",
            Self::ZoneEntry => "zone_entry",
            Self::ReportUpdate => "report_update",
            Self::ZoneUpdate => "zone_update",
            Self::NewPost => "new_post",
            Self::System => "system",
        }
    }
}

/// Persisted in-app notification. Written for every dispatch attempt so the
/// in-app history stays authoritative when push channels are down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    pub id: String,
    /// `None` for broadcasts.
    pub user_id: Option<String>,
    pub title: String,
    pub body: String,
    pub kind: NotificationKind,
    pub data: BTreeMap<String, String>,
    pub is_read: bool,
    pub is_broadcast: bool,
    pub created_at: DateTime<Utc>,
}

impl NotificationRecord {
    /// Unread record addressed to one user.
    pub fn for_user(user_id: &str, payload: &PushPayload, kind: NotificationKind) -> Self {
        Self::build(Some(user_id.to_string()), payload, kind, false)
    }

    /// Unread broadcast record visible to every user.
    pub fn broadcast(payload: &PushPayload, kind: NotificationKind) -> Self {
        Self::build(None, payload, kind, true)
    }

    fn build(
        user_id: Option<String>,
        payload: &PushPayload,
        kind: NotificationKind,
        is_broadcast: bool,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id,
            title: payload.title.clone(),
            body: payload.body.clone(),
            kind,
            data: payload.data.clone(),
            is_read: false,
            is_broadcast,
            created_at: Utc::now(),
        }
    }
}
