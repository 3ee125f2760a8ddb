//! Local stage: the containing epidemic zone names the area.

use std::sync::Arc;

use safezone_core::errors::SafeZoneResult;
use safezone_core::models::{GeoPoint, GeocodeFragment};
use safezone_core::traits::{IGeocoder, IPointStore};
use safezone_zones::ZoneMatcher;

pub struct ZoneLookupGeocoder {
    store: Arc<dyn IPointStore>,
    matcher: ZoneMatcher,
}

impl ZoneLookupGeocoder {
    pub fn new(store: Arc<dyn IPointStore>) -> Self {
        Self {
            store,
            matcher: ZoneMatcher::new(),
        }
    }
}

impl IGeocoder for ZoneLookupGeocoder {
    fn reverse(&self, point: GeoPoint) -> SafeZoneResult<Option<GeocodeFragment>> {
        let zones = self.store.list_active_zones()?;
        Ok(self
            .matcher
            .find_containing(point, &zones)
            .into_iter()
            .next()
            .map(|zone| GeocodeFragment {
                province: Some(zone.name),
                zone_id: Some(zone.id),
                ..GeocodeFragment::default()
            }))
    }

    fn name(&self) -> &str {
        "zone-lookup"
    }
}
