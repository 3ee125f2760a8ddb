use crate::errors::SafeZoneResult;
use crate::models::{CaseFilter, CasePoint, Zone};

/// Read-only access to persisted cases and zones.
pub trait IPointStore: Send + Sync {
    fn list_points(&self, filter: &CaseFilter) -> SafeZoneResult<Vec<CasePoint>>;
    fn list_active_zones(&self) -> SafeZoneResult<Vec<Zone>>;
    /// Every zone, active or not.
    fn list_zones(&self) -> SafeZoneResult<Vec<Zone>>;
    fn get_zone(&self, id: &str) -> SafeZoneResult<Option<Zone>>;
    fn get_case(&self, id: &str) -> SafeZoneResult<Option<CasePoint>>;
}
