use crate::errors::SafeZoneResult;
use crate::models::{GeoPoint, GeocodeFragment};

/// One stage of the reverse-geocoding chain.
pub trait IGeocoder: Send + Sync {
    /// `Ok(None)` when the stage has nothing to say about this point.
    fn reverse(&self, point: GeoPoint) -> SafeZoneResult<Option<GeocodeFragment>>;

    fn name(&self) -> &str;
}
