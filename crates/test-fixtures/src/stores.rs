//! In-memory collaborators.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use safezone_core::errors::{SafeZoneResult, StorageError};
use safezone_core::models::{CaseFilter, CasePoint, NotificationRecord, Zone};
use safezone_core::traits::{INotificationStore, IPointStore};

#[derive(Debug, Default)]
pub struct InMemoryPointStore {
    points: Vec<CasePoint>,
    zones: Vec<Zone>,
}

impl InMemoryPointStore {
    pub fn new(points: Vec<CasePoint>, zones: Vec<Zone>) -> Self {
        Self { points, zones }
    }
}

impl IPointStore for InMemoryPointStore {
    fn list_points(&self, filter: &CaseFilter) -> SafeZoneResult<Vec<CasePoint>> {
        Ok(self
            .points
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    fn list_active_zones(&self) -> SafeZoneResult<Vec<Zone>> {
        Ok(self.zones.iter().filter(|z| z.is_active).cloned().collect())
    }

    fn list_zones(&self) -> SafeZoneResult<Vec<Zone>> {
        Ok(self.zones.clone())
    }

    fn get_zone(&self, id: &str) -> SafeZoneResult<Option<Zone>> {
        Ok(self.zones.iter().find(|z| z.id == id).cloned())
    }

    fn get_case(&self, id: &str) -> SafeZoneResult<Option<CasePoint>> {
        Ok(self.points.iter().find(|p| p.id == id).cloned())
    }
}

/// Token registry plus a record log. Reads and writes can be made to fail.
#[derive(Debug, Default)]
pub struct InMemoryNotificationStore {
    tokens: Mutex<HashMap<String, String>>,
    records: Mutex<Vec<NotificationRecord>>,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
}

impl InMemoryNotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(self, user_id: &str, token: &str) -> Self {
        self.tokens
            .lock()
            .unwrap()
            .insert(user_id.to_string(), token.to_string());
        self
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Make token lookups fail with a storage error.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn records(&self) -> Vec<NotificationRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn records_for(&self, user_id: &str) -> Vec<NotificationRecord> {
        self.records()
            .into_iter()
            .filter(|r| r.user_id.as_deref() == Some(user_id))
            .collect()
    }
}

impl INotificationStore for InMemoryNotificationStore {
    fn device_token(&self, user_id: &str) -> SafeZoneResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::QueryFailed {
                reason: "scripted read failure".into(),
            }
            .into());
        }
        Ok(self.tokens.lock().unwrap().get(user_id).cloned())
    }

    fn record_notification(&self, record: &NotificationRecord) -> SafeZoneResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::WriteFailed {
                entity: "notification".into(),
                reason: "scripted write failure".into(),
            }
            .into());
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
