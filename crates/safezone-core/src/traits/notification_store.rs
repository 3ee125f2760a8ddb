use crate::errors::SafeZoneResult;
use crate::models::NotificationRecord;

/// Device-token lookup and in-app notification persistence.
pub trait INotificationStore: Send + Sync {
    /// The user's registered push token, if any.
    fn device_token(&self, user_id: &str) -> SafeZoneResult<Option<String>>;

    fn record_notification(&self, record: &NotificationRecord) -> SafeZoneResult<()>;
}
